//! Demo seed data: the fixed user directory and a handful of historical
//! orders so dashboards have something to show on first load.
//!
//! Seed totals are historical values, not recomputed from the current price
//! table.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use print_pro_core::{
    DeliveryOption, Email, FileId, LineItem, Money, OrderId, OrderStatus, PrintOrder, PrintSize,
    PrintType, User, UserId,
};

/// The fixed two-entry user directory. There is no registration.
#[must_use]
pub fn user_directory() -> HashMap<Email, User> {
    [
        directory_entry("user1", "user@example.com", "1234567890", false),
        directory_entry("admin1", "admin@example.com", "0987654321", true),
    ]
    .into_iter()
    .collect()
}

fn directory_entry(id: &str, email: &str, mobile: &str, is_admin: bool) -> (Email, User) {
    let email = Email::parse(email).unwrap_or_else(|err| {
        // Directory entries are compile-time constants; a parse failure here
        // is a programming error, caught by the seed tests.
        unreachable!("invalid directory email {email}: {err}")
    });
    (
        email.clone(),
        User {
            id: UserId::new(id),
            email,
            mobile: mobile.to_owned(),
            is_admin,
        },
    )
}

/// The four demo orders.
#[must_use]
pub fn demo_orders() -> Vec<PrintOrder> {
    vec![
        PrintOrder {
            id: OrderId::new("ORD-001"),
            user_id: UserId::new("user1"),
            files: vec![item("f1", "Aadhaar.pdf", 102_400, PrintType::BlackAndWhite, PrintSize::A4, 2)],
            delivery_option: DeliveryOption::SelfPickup,
            total_cost: Money::from_rupees(20),
            order_date: ts("2023-10-26T10:00:00Z"),
            status: OrderStatus::Delivered,
            shipping_address: None,
        },
        PrintOrder {
            id: OrderId::new("ORD-002"),
            user_id: UserId::new("user1"),
            files: vec![item("f2", "PAN-Card.jpg", 204_800, PrintType::Color, PrintSize::PvcCard, 1)],
            delivery_option: DeliveryOption::Courier,
            total_cost: Money::from_rupees(150),
            order_date: ts("2023-10-27T11:30:00Z"),
            status: OrderStatus::Dispatched,
            shipping_address: Some("123 Main St, Anytown 12345".to_owned()),
        },
        PrintOrder {
            id: OrderId::new("ORD-003"),
            user_id: UserId::new("user2"),
            files: vec![
                item("f3", "VoterID.png", 153_600, PrintType::Color, PrintSize::PvcCard, 1),
                item("f4", "RationCard.pdf", 307_200, PrintType::BlackAndWhite, PrintSize::A4, 5),
            ],
            delivery_option: DeliveryOption::Courier,
            total_cost: Money::from_rupees(250),
            order_date: ts("2023-10-28T09:00:00Z"),
            status: OrderStatus::Printed,
            shipping_address: Some("7 Tank Bund Rd, Hyderabad 500001".to_owned()),
        },
        PrintOrder {
            id: OrderId::new("ORD-004"),
            user_id: UserId::new("user1"),
            files: vec![item(
                "f5",
                "University-Notes.pdf",
                4_096_000,
                PrintType::BlackAndWhite,
                PrintSize::A5,
                50,
            )],
            delivery_option: DeliveryOption::SelfPickup,
            total_cost: Money::from_rupees(500),
            order_date: ts("2023-10-29T14:00:00Z"),
            status: OrderStatus::Pending,
            shipping_address: None,
        },
    ]
}

fn item(
    id: &str,
    file_name: &str,
    file_size: u64,
    print_type: PrintType,
    print_size: PrintSize,
    quantity: u32,
) -> LineItem {
    LineItem {
        id: FileId::new(id),
        file_name: file_name.to_owned(),
        file_size,
        print_type,
        print_size,
        quantity,
    }
}

fn ts(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .map_or_else(|_| Utc::now(), |date| date.with_timezone(&Utc))
}
