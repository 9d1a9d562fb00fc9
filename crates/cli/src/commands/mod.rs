//! CLI command implementations.

pub mod login;
pub mod orders;

use std::path::PathBuf;

use thiserror::Error;

use print_pro_core::EmailError;
use print_pro_storefront::AppError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The given email is structurally invalid.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The email is not in the user directory.
    #[error("no account found for {0}")]
    UnknownUser(String),

    /// A flag value could not be parsed.
    #[error("{0}")]
    InvalidArgument(String),

    /// An uploaded file could not be read from disk.
    #[error("could not read {path}: {source}")]
    ReadFile {
        /// The path that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A storefront-level failure (blocked transition, rejected update, ...).
    #[error(transparent)]
    App(#[from] AppError),
}
