//! Configuration options for transcription

/// What to do when the document root is not an object
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RootPolicy {
    /// Fail with [`crate::TranscribeError::NonObjectRoot`]
    #[default]
    Reject,
    /// Treat the value as the only entry of an implicit root object,
    /// headed by `title`
    Wrap { title: String },
}

/// Options for Markdown transcription
#[derive(Debug, Clone, Default)]
pub struct TranscribeOptions {
    /// Handling of bare arrays and scalars at the top level
    pub root: RootPolicy,
}

impl TranscribeOptions {
    pub fn with_root(mut self, root: RootPolicy) -> Self {
        self.root = root;
        self
    }
}
