//! Error handling for the strapper application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for strapper operations.
///
/// Every variant is fatal to the run: nothing is retried and a partially
/// rewritten project is left on disk for inspection.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents a broken question schema or an unknown installer kind
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents answers that cannot be used as given
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// The user interrupted a prompt
    #[error("Prompt cancelled: {0}.")]
    Cancelled(String),

    #[error("Command '{command}' failed with exit code {code:?}: {output}")]
    ProcessError { command: String, code: Option<i32>, output: String },

    #[error("Operation timed out: {0}.")]
    TimeoutError(String),

    #[error("Git error: {0}.")]
    Git2Error(#[from] git2::Error),

    /// The project manifest (composer.json) is not valid JSON
    #[error("Malformed manifest: {0}.")]
    ManifestError(serde_json::Error),

    /// The answers file is neither JSON nor YAML
    #[error("Answers file error: {0}.")]
    AnswersError(String),

    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Pattern error: {0}.")]
    RegexError(#[from] regex::Error),

    #[error("Glob error: {0}.")]
    GlobError(#[from] globset::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
