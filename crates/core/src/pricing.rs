//! The static price table.
//!
//! Prices are a closed mapping from (size, type) to a unit price, plus a
//! flat fee per delivery option. Every combination of the closed enums is
//! priced explicitly, so there is no partial-table fallback to reach.
//! Deterministic and side-effect free.

use crate::models::LineItem;
use crate::types::{DeliveryOption, Money, PrintSize, PrintType};

/// Unit price for one copy at the given size and color mode.
#[must_use]
pub fn unit_price(size: PrintSize, print_type: PrintType) -> Money {
    let rupees = match (size, print_type) {
        (PrintSize::A4, PrintType::BlackAndWhite) => 2,
        (PrintSize::A4, PrintType::Color) => 10,
        (PrintSize::A5, PrintType::BlackAndWhite) => 1,
        (PrintSize::A5, PrintType::Color) => 5,
        (PrintSize::PvcCard, PrintType::BlackAndWhite) => 50,
        (PrintSize::PvcCard, PrintType::Color) => 100,
    };
    Money::from_rupees(rupees)
}

/// Flat fee for the given delivery option.
#[must_use]
pub fn delivery_fee(option: DeliveryOption) -> Money {
    match option {
        DeliveryOption::Courier => Money::from_rupees(50),
        DeliveryOption::SelfPickup | DeliveryOption::DigitalDownload => Money::ZERO,
    }
}

/// Cost of one line item: unit price times quantity.
#[must_use]
pub fn line_cost(item: &LineItem) -> Money {
    unit_price(item.print_size, item.print_type) * item.quantity
}

/// Sum of line costs, before the delivery fee.
#[must_use]
pub fn subtotal<'a, I>(items: I) -> Money
where
    I: IntoIterator<Item = &'a LineItem>,
{
    items.into_iter().map(line_cost).sum()
}

/// Grand total: subtotal plus delivery fee.
#[must_use]
pub fn order_total<'a, I>(items: I, delivery: DeliveryOption) -> Money
where
    I: IntoIterator<Item = &'a LineItem>,
{
    subtotal(items) + delivery_fee(delivery)
}
