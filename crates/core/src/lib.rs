//! PrintPro Core - Shared domain types and pricing.
//!
//! This crate provides the common types used across all PrintPro components:
//! - `store` - In-memory mock persistence layer
//! - `storefront` - Customer-facing order workflow
//! - `cli` - Command-line tools for driving the demo flow
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no async,
//! no store access. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, money, and the
//!   closed print/delivery/status enumerations
//! - [`models`] - User, line item, and order records
//! - [`pricing`] - The static price table and order total computation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod pricing;
pub mod types;

pub use models::*;
pub use types::*;
