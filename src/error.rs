//! Error handling for sprout.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::registry::GeneratedFileKind;

/// Errors that can abort a generation run.
///
/// Nothing is recovered locally: every variant bubbles up to the caller and
/// ends the run, leaving whatever was already written on disk.
#[derive(Error, Debug)]
pub enum Error {
    /// The output root could not be wiped or recreated.
    #[error("Cannot prepare output directory '{}': {source}.", .output_dir.display())]
    SetupError {
        output_dir: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A template referenced by the registry is missing or unreadable.
    #[error("Cannot read template '{}': {source}.", .template.display())]
    TemplateReadError {
        template: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A component directory or a generated file could not be written.
    #[error("Cannot write '{}': {source}.", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The type registry has no entry for a kind. This is a programming or
    /// configuration mistake, not a runtime input error.
    #[error("No template registered for '{kind}'.")]
    UnknownKind { kind: GeneratedFileKind },

    /// The configuration file could not be loaded or parsed.
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),
}

/// Convenience type alias for results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}
