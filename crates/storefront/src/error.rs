//! The storefront failure taxonomy.
//!
//! Nothing here is fatal to the process. Upload failures are inline and
//! user-correctable, submission and status-update failures are surfaced
//! once and leave state ready for a manual retry, and authorization
//! failures render as an access-denied state directing the user to log in.

use thiserror::Error;

use crate::draft::{AdvanceError, UploadError};
use crate::session::Page;

/// Application-level error type for the storefront.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    /// A file was rejected during upload; the draft is unchanged.
    #[error(transparent)]
    Upload(#[from] UploadError),

    /// A forward step transition was blocked by its guard.
    #[error(transparent)]
    Advance(#[from] AdvanceError),

    /// The draft could not be submitted; it is preserved for retry.
    #[error("failed to place order")]
    SubmitFailed,

    /// A status update was rejected by the store; the optimistic local
    /// change has been reverted.
    #[error("failed to update status for order {0}")]
    StatusUpdateFailed(String),

    /// The page requires a logged-in user.
    #[error("please log in to view {0}")]
    LoginRequired(Page),

    /// The page requires an admin user.
    #[error("access denied")]
    AccessDenied,
}
