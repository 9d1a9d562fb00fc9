//! Closed enumerations shared across the order boundary.
//!
//! The serialized values are stable wire names: the storefront displays
//! them verbatim and the seed data records them, so they must not drift.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Print color mode for a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PrintType {
    /// Monochrome printing.
    #[default]
    #[serde(rename = "Black & White")]
    BlackAndWhite,
    /// Full-color printing.
    #[serde(rename = "Color")]
    Color,
}

impl PrintType {
    /// All print types, in display order.
    pub const ALL: [Self; 2] = [Self::BlackAndWhite, Self::Color];
}

impl fmt::Display for PrintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlackAndWhite => write!(f, "Black & White"),
            Self::Color => write!(f, "Color"),
        }
    }
}

impl FromStr for PrintType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Black & White" | "bw" => Ok(Self::BlackAndWhite),
            "Color" | "color" => Ok(Self::Color),
            _ => Err(format!("invalid print type: {s}")),
        }
    }
}

/// Physical print size for a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PrintSize {
    /// Standard A4 sheet.
    #[default]
    A4,
    /// Half-size A5 sheet.
    A5,
    /// Laminated PVC identity card.
    #[serde(rename = "PVC Card")]
    PvcCard,
}

impl PrintSize {
    /// All print sizes, in display order.
    pub const ALL: [Self; 3] = [Self::A4, Self::A5, Self::PvcCard];
}

impl fmt::Display for PrintSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A4 => write!(f, "A4"),
            Self::A5 => write!(f, "A5"),
            Self::PvcCard => write!(f, "PVC Card"),
        }
    }
}

impl FromStr for PrintSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A4" | "a4" => Ok(Self::A4),
            "A5" | "a5" => Ok(Self::A5),
            "PVC Card" | "pvc" => Ok(Self::PvcCard),
            _ => Err(format!("invalid print size: {s}")),
        }
    }
}

/// How a finished order reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DeliveryOption {
    /// Customer collects from the shop; no fee.
    #[default]
    #[serde(rename = "Self-Pickup")]
    SelfPickup,
    /// Courier shipment to an address; flat fee, address required.
    #[serde(rename = "Courier Delivery")]
    Courier,
    /// Electronic delivery; no fee.
    #[serde(rename = "Digital Download")]
    DigitalDownload,
}

impl DeliveryOption {
    /// All delivery options, in display order.
    pub const ALL: [Self; 3] = [Self::SelfPickup, Self::Courier, Self::DigitalDownload];

    /// Whether this option requires a shipping address.
    #[must_use]
    pub const fn requires_address(self) -> bool {
        matches!(self, Self::Courier)
    }
}

impl fmt::Display for DeliveryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfPickup => write!(f, "Self-Pickup"),
            Self::Courier => write!(f, "Courier Delivery"),
            Self::DigitalDownload => write!(f, "Digital Download"),
        }
    }
}

impl FromStr for DeliveryOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Self-Pickup" | "pickup" => Ok(Self::SelfPickup),
            "Courier Delivery" | "courier" => Ok(Self::Courier),
            "Digital Download" | "download" => Ok(Self::DigitalDownload),
            _ => Err(format!("invalid delivery option: {s}")),
        }
    }
}

/// Lifecycle stage of a finalized order.
///
/// Only the store mutates status, and only on an admin's request. The
/// normal progression is Pending → Printed → Dispatched → Delivered;
/// Cancelled is a terminal side exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Received, not yet printed.
    #[default]
    Pending,
    /// Printed, awaiting dispatch.
    Printed,
    /// Handed to the courier or ready for pickup.
    Dispatched,
    /// Received by the customer.
    Delivered,
    /// Cancelled by an admin.
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Printed,
        Self::Dispatched,
        Self::Delivered,
        Self::Cancelled,
    ];
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Printed => write!(f, "Printed"),
            Self::Dispatched => write!(f, "Dispatched"),
            Self::Delivered => write!(f, "Delivered"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" | "pending" => Ok(Self::Pending),
            "Printed" | "printed" => Ok(Self::Printed),
            "Dispatched" | "dispatched" => Ok(Self::Dispatched),
            "Delivered" | "delivered" => Ok(Self::Delivered),
            "Cancelled" | "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}
