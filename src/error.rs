//! Error handling for Stencil.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while generating components.
///
/// Built-in generation stops at the first error. Custom template
/// materialization stops only on the template-level variants; per-file
/// `FileSystemError`s are collected into its report instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Empty or otherwise unusable component name
    #[error("Invalid argument: {0}.")]
    InvalidArgument(String),

    /// The custom template root is missing or cannot be read
    #[error("Template source '{path}' is unavailable: {reason}.")]
    TemplateSourceUnavailable { path: String, reason: String },

    /// A directory that was expected to exist does not
    #[error("Path '{path}' is not an existing directory.")]
    PathUnavailable { path: String },

    /// A single read or write failed
    #[error("Filesystem error on '{path}': {source}.")]
    FileSystemError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Configuration file missing, unreadable or malformed
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Pattern error: {0}.")]
    PatternError(#[from] regex::Error),

    #[error("Prompt error: {0}.")]
    PromptError(String),
}

impl Error {
    /// Wraps an I/O error together with the path it happened on.
    pub fn fs<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        Error::FileSystemError { path: path.as_ref().display().to_string(), source }
    }
}

/// Convenience type alias for results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}
