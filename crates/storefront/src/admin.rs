//! The admin order board.
//!
//! Status changes are optimistic: the board applies the new status locally
//! before the store call resolves, and restores the prior status if the
//! store rejects the update. A compensating action, not a transaction.

use tracing::warn;

use print_pro_core::{OrderId, OrderStatus, PrintOrder};
use print_pro_store::OrderStore;

use crate::error::AppError;

/// A local view of every order in the store, with status controls.
#[derive(Debug, Default)]
pub struct OrderBoard {
    orders: Vec<PrintOrder>,
}

impl OrderBoard {
    /// Load the board from the store's full collection.
    pub async fn load(store: &impl OrderStore) -> Self {
        Self {
            orders: store.all_orders().await,
        }
    }

    /// Re-query the store, replacing the local view.
    pub async fn refresh(&mut self, store: &impl OrderStore) {
        self.orders = store.all_orders().await;
    }

    /// The orders as currently displayed, in store insertion order.
    #[must_use]
    pub fn orders(&self) -> &[PrintOrder] {
        &self.orders
    }

    /// Change one order's status.
    ///
    /// The local view is updated immediately, then the store is asked to
    /// confirm. If the store reports the order unknown, the local change
    /// is rolled back.
    ///
    /// # Errors
    ///
    /// [`AppError::StatusUpdateFailed`] when the store rejects the update;
    /// the board shows the prior status again.
    pub async fn set_status(
        &mut self,
        store: &impl OrderStore,
        order_id: &OrderId,
        status: OrderStatus,
    ) -> Result<(), AppError> {
        // Phase 1: apply locally.
        let prior = self.apply_local(order_id, status);

        // Phase 2: confirm remotely; roll back on rejection.
        if store.set_order_status(order_id, status).await.is_none() {
            if let Some(prior) = prior {
                self.apply_local(order_id, prior);
            }
            warn!(%order_id, "status update rejected, reverting");
            return Err(AppError::StatusUpdateFailed(order_id.to_string()));
        }
        Ok(())
    }

    fn apply_local(&mut self, order_id: &OrderId, status: OrderStatus) -> Option<OrderStatus> {
        let order = self.orders.iter_mut().find(|order| &order.id == order_id)?;
        let prior = order.status;
        order.status = status;
        Some(prior)
    }
}
