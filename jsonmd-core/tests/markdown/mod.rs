//! Markdown output tests
//!
//! Whole-document checks and generated-document properties for JSON → Markdown.

mod export;
mod properties;
