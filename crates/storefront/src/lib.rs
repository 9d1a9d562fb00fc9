//! PrintPro Storefront - The customer-facing order workflow.
//!
//! This crate holds the client-side state of the demo: the four-step order
//! draft state machine, upload validation, the session (current user, page,
//! theme), and the admin order board with its optimistic status updates. Persistence is delegated to a
//! [`print_pro_store::OrderStore`], which is always passed in by reference;
//! there is no ambient global store.
//!
//! # Modules
//!
//! - [`config`] - Environment-driven configuration
//! - [`draft`] - The Upload → Options → Delivery → Review state machine
//! - [`session`] - Current user, page, and theme
//! - [`admin`] - All-orders board with optimistic status updates
//! - [`error`] - The failure taxonomy

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod admin;
pub mod config;
pub mod draft;
pub mod error;
pub mod session;

pub use admin::OrderBoard;
pub use config::{ConfigError, StorefrontConfig};
pub use draft::{FileUpload, OrderDraft, Step};
pub use error::AppError;
pub use session::{Page, Session, Theme};
