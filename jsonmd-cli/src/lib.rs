//! Collaborators around the jsonmd transcriber
//!
//! The core crate only maps a parsed value to a string. Everything that touches the outside
//! world lives here: opening and decoding the input file, displaying the result, saving it,
//! and reporting status text to the user.
//!
//! The binary in main.rs is a thin clap shell over [`convert::convert`].

pub mod convert;
pub mod error;
pub mod overrides;
pub mod status;

pub use error::CliError;
pub use status::StatusSink;
