use thiserror::Error;
use tracing::{debug, info, warn};

use crate::backend::{OperationError, OrderSource};
use crate::notification::NotificationCenter;
use crate::orders::filter::{OrderCriteria, PriorityFilter, StatusFilter};
use crate::orders::types::{OrderRecord, OrderStatus};
use crate::orders::views::{self, KanbanBoard, ViewType};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("no order with id {0}")]
    NotFound(String),
}

/// Replace the status of the order with `order_id`, leaving every other
/// record and field as it was.
pub fn set_status(
    orders: &mut [OrderRecord],
    order_id: &str,
    status: OrderStatus,
) -> Result<(), OrderError> {
    let order = orders
        .iter_mut()
        .find(|order| order.id == order_id)
        .ok_or_else(|| OrderError::NotFound(order_id.to_string()))?;
    order.status = status;
    Ok(())
}

/// Owns the canonical order list and the filtered projection derived from it.
///
/// Every change to the list or to a criterion recomputes the projection.
#[derive(Debug, Default)]
pub struct OrderBrowser {
    orders: Vec<OrderRecord>,
    filtered: Vec<OrderRecord>,
    criteria: OrderCriteria,
    view: ViewType,
    loading: bool,
    notifications: NotificationCenter,
}

impl OrderBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orders(orders: Vec<OrderRecord>) -> Self {
        let mut browser = Self::new();
        browser.replace_orders(orders);
        browser
    }

    pub fn orders(&self) -> &[OrderRecord] {
        &self.orders
    }

    pub fn filtered(&self) -> &[OrderRecord] {
        &self.filtered
    }

    pub fn criteria(&self) -> &OrderCriteria {
        &self.criteria
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn view(&self) -> ViewType {
        self.view
    }

    pub fn set_view(&mut self, view: ViewType) {
        self.view = view;
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationCenter {
        &mut self.notifications
    }

    pub fn replace_orders(&mut self, orders: Vec<OrderRecord>) {
        self.orders = orders;
        self.recompute();
    }

    pub fn set_search_term(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
        self.recompute();
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.criteria.status = status;
        self.recompute();
    }

    pub fn set_priority_filter(&mut self, priority: PriorityFilter) {
        self.criteria.priority = priority;
        self.recompute();
    }

    pub fn set_criteria(&mut self, criteria: OrderCriteria) {
        self.criteria = criteria;
        self.recompute();
    }

    pub fn recompute(&mut self) {
        self.filtered = self.criteria.apply(&self.orders);
        debug!(
            total = self.orders.len(),
            shown = self.filtered.len(),
            search = %self.criteria.search,
            status = %self.criteria.status,
            priority = %self.criteria.priority,
            "Order projection recomputed"
        );
    }

    /// Enter the loading state ahead of a fetch.
    pub fn begin_load(&mut self) {
        debug!("Order load started");
        self.loading = true;
    }

    /// Leave the loading state with the outcome of the fetch. A failure keeps
    /// the current list and raises a notification.
    pub fn finish_load(
        &mut self,
        outcome: Result<Vec<OrderRecord>, OperationError>,
    ) -> Result<usize, OperationError> {
        self.loading = false;

        match outcome {
            Ok(orders) => {
                let count = orders.len();
                self.replace_orders(orders);
                Ok(count)
            }
            Err(e) => {
                warn!("Order load failed: {}", e);
                self.notifications.error("Failed to load orders");
                Err(e)
            }
        }
    }

    /// Fetch the order list. The browser reports `is_loading` until it returns.
    pub async fn load<S>(&mut self, source: &S) -> Result<usize, OperationError>
    where
        S: OrderSource + ?Sized,
    {
        self.begin_load();
        let outcome = source.list_orders().await;
        self.finish_load(outcome)
    }

    /// Set the status of one order. No transition rules apply: any status can
    /// follow any other.
    pub fn update_order_status(
        &mut self,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<&[OrderRecord], OrderError> {
        set_status(&mut self.orders, order_id, status)?;
        info!(order.id = %order_id, status = %status, "Order status updated");
        self.recompute();
        self.notifications.success("Order updated successfully");
        Ok(&self.orders)
    }

    pub fn kanban(&self) -> KanbanBoard<'_> {
        views::kanban(&self.filtered)
    }

    pub fn timeline(&self) -> Vec<&OrderRecord> {
        views::timeline(&self.filtered)
    }

    /// Text rendering of the filtered orders in the current view.
    pub fn render(&self) -> String {
        views::render(self.view, &self.filtered)
    }
}
