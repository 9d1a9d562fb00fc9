//! The in-memory mock store.

use std::collections::HashMap;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use print_pro_core::{
    Email, OrderId, OrderStatus, OrderSubmission, PrintOrder, User, UserId,
};

use crate::{OrderStore, seed};

/// In-memory stand-in for the print shop backend.
///
/// Holds every order in a single append-only collection and the fixed user
/// directory. Each instance is fully independent: construct one per test,
/// or one per process for the demo, and pass it by reference to consumers.
/// There is no ambient global state.
///
/// Every operation sleeps for the configured latency before touching the
/// collection, mimicking a network round trip. The collection itself sits
/// behind an async mutex so concurrent callers serialize at the same
/// boundary a single-threaded event loop would.
pub struct MockStore {
    latency: Duration,
    directory: HashMap<Email, User>,
    orders: Mutex<Vec<PrintOrder>>,
}

impl MockStore {
    /// Create an empty store with the fixed user directory.
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            directory: seed::user_directory(),
            orders: Mutex::new(Vec::new()),
        }
    }

    /// Create a store pre-populated with the demo orders.
    #[must_use]
    pub fn seeded(latency: Duration) -> Self {
        Self {
            latency,
            directory: seed::user_directory(),
            orders: Mutex::new(seed::demo_orders()),
        }
    }

    /// Number of orders currently held.
    pub async fn order_count(&self) -> usize {
        self.orders.lock().await.len()
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl OrderStore for MockStore {
    #[instrument(skip(self))]
    async fn lookup_user(&self, email: &Email) -> Option<User> {
        self.simulate_latency().await;
        let user = self.directory.get(email).cloned();
        debug!(found = user.is_some(), "directory lookup");
        user
    }

    #[instrument(skip(self))]
    async fn orders_for_user(&self, user_id: &UserId) -> Vec<PrintOrder> {
        self.simulate_latency().await;
        self.orders
            .lock()
            .await
            .iter()
            .filter(|order| &order.user_id == user_id)
            .cloned()
            .collect()
    }

    #[instrument(skip(self))]
    async fn all_orders(&self) -> Vec<PrintOrder> {
        self.simulate_latency().await;
        self.orders.lock().await.clone()
    }

    #[instrument(skip(self, submission), fields(user_id = %submission.user_id))]
    async fn submit_order(&self, submission: OrderSubmission) -> PrintOrder {
        self.simulate_latency().await;
        let mut orders = self.orders.lock().await;
        let order = PrintOrder {
            id: OrderId::from_sequence(orders.len() + 1),
            user_id: submission.user_id,
            files: submission.files,
            delivery_option: submission.delivery_option,
            total_cost: submission.total_cost,
            order_date: Utc::now(),
            status: OrderStatus::Pending,
            shipping_address: submission.shipping_address,
        };
        debug!(order_id = %order.id, total = %order.total_cost, "order accepted");
        orders.push(order.clone());
        order
    }

    #[instrument(skip(self))]
    async fn set_order_status(
        &self,
        order_id: &OrderId,
        status: OrderStatus,
    ) -> Option<PrintOrder> {
        self.simulate_latency().await;
        let mut orders = self.orders.lock().await;
        let order = orders.iter_mut().find(|order| &order.id == order_id)?;
        order.status = status;
        debug!(%order_id, %status, "status updated");
        Some(order.clone())
    }
}
