//! Admin flow: reviewing all orders and the optimistic status update with
//! its compensating revert.

use print_pro_core::{OrderId, OrderStatus};
use print_pro_store::OrderStore;
use print_pro_storefront::{AppError, OrderBoard, Page, Session};

use print_pro_integration_tests::{login, seeded_store};

#[tokio::test]
async fn test_admin_sees_every_order() {
    let store = seeded_store();
    let board = OrderBoard::load(&store).await;
    let ids: Vec<_> = board.orders().iter().map(|o| o.id.as_str().to_owned()).collect();
    assert_eq!(ids, ["ORD-001", "ORD-002", "ORD-003", "ORD-004"]);
}

#[tokio::test]
async fn test_status_update_round_trips_through_the_store() {
    let store = seeded_store();
    let mut board = OrderBoard::load(&store).await;

    board
        .set_status(&store, &OrderId::new("ORD-003"), OrderStatus::Dispatched)
        .await
        .unwrap();

    // Both the board and a fresh query agree.
    assert_eq!(board.orders()[2].status, OrderStatus::Dispatched);
    let fresh = store.all_orders().await;
    assert_eq!(fresh[2].status, OrderStatus::Dispatched);

    // Only that order changed.
    assert_eq!(fresh[0].status, OrderStatus::Delivered);
    assert_eq!(fresh[3].status, OrderStatus::Pending);
}

#[tokio::test]
async fn test_unknown_order_reverts_and_reports_failure() {
    let store = seeded_store();
    let mut board = OrderBoard::load(&store).await;
    let before: Vec<_> = board.orders().to_vec();

    let err = board
        .set_status(&store, &OrderId::new("ORD-042"), OrderStatus::Cancelled)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::StatusUpdateFailed(_)));
    assert_eq!(board.orders(), before.as_slice());
    assert_eq!(store.all_orders().await, before);
}

#[tokio::test]
async fn test_non_admin_is_denied_the_admin_dashboard() {
    let store = seeded_store();
    let user = login(&store, "user@example.com").await;

    let mut session = Session::new();
    session.login(user);
    assert_eq!(session.navigate(Page::AdminDashboard), Err(AppError::AccessDenied));

    let mut anonymous = Session::new();
    assert_eq!(anonymous.navigate(Page::AdminDashboard), Err(AppError::AccessDenied));
}
