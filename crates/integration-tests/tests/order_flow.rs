//! End-to-end order flow: login, build a draft through every guard,
//! submit, and read it back from the dashboard.

use print_pro_core::{DeliveryOption, Money, OrderStatus, PrintSize, PrintType, UserId};
use print_pro_store::OrderStore;
use print_pro_storefront::{FileUpload, OrderDraft, Page, Session, Step};

use print_pro_integration_tests::{empty_store, login, seeded_store};

fn pdf(name: &str, size: usize) -> FileUpload {
    FileUpload {
        name: name.to_owned(),
        content_type: "application/pdf".to_owned(),
        bytes: vec![0; size],
    }
}

#[tokio::test]
async fn test_full_courier_order_flow() {
    let store = empty_store();
    let chrono_before = chrono::Utc::now();

    // Login and routing.
    let user = login(&store, "user@example.com").await;
    let mut session = Session::new();
    session.login(user.clone());
    assert_eq!(session.page(), Page::Dashboard);
    session.navigate(Page::NewOrder).unwrap();

    // Step 1: Upload, with one rejection along the way.
    let mut draft = OrderDraft::new(user.id.clone());
    let id = draft.add_file(pdf("thesis.pdf", 4096)).unwrap();
    let oversized = draft.add_file(pdf("scans.pdf", 6 * 1024 * 1024));
    assert!(oversized.is_err());
    assert_eq!(draft.files().len(), 1);
    assert_eq!(draft.next(), Ok(Step::Options));

    // Step 2: Options.
    draft.set_print_type(&id, PrintType::Color);
    draft.set_print_size(&id, PrintSize::A4);
    draft.set_quantity(&id, 3);
    assert_eq!(draft.next(), Ok(Step::Delivery));

    // Step 3: Delivery, guard first.
    draft.set_delivery(DeliveryOption::Courier);
    assert!(draft.next().is_err());
    draft.set_address("42 MG Road, Bengaluru 560001");
    assert_eq!(draft.next(), Ok(Step::Review));

    // Step 4: Review. 3 x 10 + 50 courier = 80.
    assert_eq!(draft.subtotal(), Money::from_rupees(30));
    assert_eq!(draft.total(), Money::from_rupees(80));

    let order = draft.submit(&store).await.unwrap();
    assert_eq!(order.id.as_str(), "ORD-001");
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total_cost, Money::from_rupees(80));
    assert!(order.order_date >= chrono_before);
    assert_eq!(
        order.shipping_address.as_deref(),
        Some("42 MG Road, Bengaluru 560001")
    );

    // Dashboard readback.
    let dashboard = store.orders_for_user(&user.id).await;
    assert_eq!(dashboard.len(), 1);
    assert_eq!(dashboard[0], order);
}

#[tokio::test]
async fn test_dashboard_shows_only_own_orders_in_insertion_order() {
    let store = seeded_store();
    let user = login(&store, "user@example.com").await;

    let orders = store.orders_for_user(&user.id).await;
    let ids: Vec<_> = orders.iter().map(|o| o.id.as_str().to_owned()).collect();
    assert_eq!(ids, ["ORD-001", "ORD-002", "ORD-004"]);
    assert!(orders.iter().all(|o| o.user_id == UserId::new("user1")));
}

#[tokio::test]
async fn test_submission_grows_seeded_store_by_exactly_one() {
    let store = seeded_store();
    let user = login(&store, "user@example.com").await;
    let before = store.all_orders().await.len();

    let mut draft = OrderDraft::new(user.id);
    draft.add_file(pdf("form.pdf", 512)).unwrap();
    while draft.step() != Step::Review {
        draft.next().unwrap();
    }
    let order = draft.submit(&store).await.unwrap();

    assert_eq!(order.id.as_str(), "ORD-005");
    assert_eq!(store.all_orders().await.len(), before + 1);
}

#[tokio::test]
async fn test_unregistered_email_resolves_to_none() {
    let store = seeded_store();
    let email = print_pro_core::Email::parse("stranger@example.com").unwrap();
    assert!(store.lookup_user(&email).await.is_none());
}

#[tokio::test]
async fn test_admin_login_carries_the_admin_flag() {
    let store = seeded_store();
    let admin = login(&store, "admin@example.com").await;
    assert!(admin.is_admin);

    let mut session = Session::new();
    session.login(admin);
    assert_eq!(session.page(), Page::AdminDashboard);
}
