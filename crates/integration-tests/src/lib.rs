//! Integration tests for PrintPro.
//!
//! Each test constructs its own [`print_pro_store::MockStore`] instance
//! (usually with zero latency) and drives the storefront library against
//! it in-process, end to end: directory login, the four-step draft
//! workflow, dashboard listings, and the admin board.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p print-pro-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `order_flow` - Login through draft submission and dashboard listing
//! - `admin_flow` - All-orders review and optimistic status updates
//! - `wire_format` - JSON shape of the order record

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::time::Duration;

use print_pro_core::{Email, User};
use print_pro_store::{MockStore, OrderStore};

/// A zero-latency store seeded with the demo orders.
#[must_use]
pub fn seeded_store() -> MockStore {
    MockStore::seeded(Duration::ZERO)
}

/// A zero-latency empty store.
#[must_use]
pub fn empty_store() -> MockStore {
    MockStore::new(Duration::ZERO)
}

/// Log in through the directory, panicking on unknown emails.
///
/// # Panics
///
/// Panics when the email does not parse or is not in the directory, which
/// in a test means the fixture is wrong.
pub async fn login(store: &MockStore, email: &str) -> User {
    let email = Email::parse(email).expect("test email must parse");
    store
        .lookup_user(&email)
        .await
        .unwrap_or_else(|| panic!("{email} is not in the directory"))
}
