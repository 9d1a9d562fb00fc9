//! PrintPro Store - In-memory mock persistence.
//!
//! This crate simulates the backend the storefront would talk to in a real
//! deployment: a single ordered collection of orders plus a fixed user
//! directory, with a configurable artificial latency on every operation.
//! Nothing is durable; state lives only for the process lifetime.
//!
//! # The seam
//!
//! Consumers depend on the [`OrderStore`] trait, not on [`MockStore`]
//! directly. If this demo were ever productionized, a real persistence and
//! auth layer would be substituted behind the same five operations.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod mock;
mod seed;

pub use mock::MockStore;

use print_pro_core::{Email, OrderId, OrderStatus, OrderSubmission, PrintOrder, User, UserId};

/// The persistence boundary of the storefront.
///
/// All operations are asynchronous and none of them fails with an error:
/// lookups that find nothing resolve to `None`, and submission always
/// succeeds in the mock design (a gap the real backend would close with
/// validation and capacity checks).
pub trait OrderStore {
    /// Resolve a login email against the user directory.
    ///
    /// There is no credential check; membership in the directory is the
    /// whole of authentication.
    fn lookup_user(&self, email: &Email) -> impl Future<Output = Option<User>> + Send;

    /// All orders owned by the given user, in store insertion order.
    fn orders_for_user(&self, user_id: &UserId) -> impl Future<Output = Vec<PrintOrder>> + Send;

    /// The entire collection, for administrative review.
    fn all_orders(&self) -> impl Future<Output = Vec<PrintOrder>> + Send;

    /// Accept a submitted draft: assign the next sequential `ORD-NNN`
    /// identifier and the current timestamp, set status to Pending, append,
    /// and return the stored order.
    fn submit_order(&self, submission: OrderSubmission)
    -> impl Future<Output = PrintOrder> + Send;

    /// Overwrite the status of the identified order, returning the updated
    /// record, or `None` (collection untouched) when the id is unknown.
    fn set_order_status(
        &self,
        order_id: &OrderId,
        status: OrderStatus,
    ) -> impl Future<Output = Option<PrintOrder>> + Send;
}
