//! Domain records shared between the storefront and the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{
    DeliveryOption, Email, FileId, Money, OrderId, OrderStatus, PrintSize, PrintType, UserId,
};

/// A directory user.
///
/// Users exist only in the fixed directory; there is no registration and
/// no credential. A `User` value is created at login and dropped at logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Directory identifier (`user1`, `admin1`).
    pub id: UserId,
    /// Login email address.
    pub email: Email,
    /// Contact mobile number.
    pub mobile: String,
    /// Whether this user may view and update all orders.
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

/// One uploaded file with its print options, as it appears in a finalized
/// order. The binary payload was dropped at submission; only the file's
/// name and byte size survive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Identifier assigned when the file entered the draft.
    pub id: FileId,
    /// Original file name, unique within the order.
    pub file_name: String,
    /// File size in bytes.
    pub file_size: u64,
    /// Color mode.
    pub print_type: PrintType,
    /// Physical size.
    pub print_size: PrintSize,
    /// Number of copies, always at least 1.
    pub quantity: u32,
}

/// A finalized print order as held by the store.
///
/// The identifier, timestamp, and initial status are assigned by the store
/// at submission. Status is the only field mutated afterwards, and only by
/// an admin action; orders are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintOrder {
    /// Sequential store identifier (`ORD-NNN`).
    pub id: OrderId,
    /// Owning user.
    pub user_id: UserId,
    /// Finalized line items, in upload order.
    pub files: Vec<LineItem>,
    /// Chosen delivery method.
    pub delivery_option: DeliveryOption,
    /// Sum of per-line costs plus the delivery fee.
    pub total_cost: Money,
    /// When the store accepted the order.
    pub order_date: DateTime<Utc>,
    /// Lifecycle stage.
    pub status: OrderStatus,
    /// Destination address; present iff delivery is by courier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
}

/// The record a draft submits to the store: a [`PrintOrder`] minus the
/// fields the store assigns (id, date, status).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    /// Owning user.
    pub user_id: UserId,
    /// Finalized line items.
    pub files: Vec<LineItem>,
    /// Chosen delivery method.
    pub delivery_option: DeliveryOption,
    /// Total computed by the draft at submission time.
    pub total_cost: Money,
    /// Destination address; present iff delivery is by courier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
}
