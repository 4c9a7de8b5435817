use std::fmt;
use std::str::FromStr;

use crate::orders::types::{OrderPriority, OrderRecord, OrderStatus};

pub const ALL_SENTINEL: &str = "all";

/// A filter criterion that is either unconstrained (`all`) or pinned to one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

impl<T: FromStr> FromStr for Selection<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL_SENTINEL) {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => write!(f, "{ALL_SENTINEL}"),
            Selection::Only(value) => write!(f, "{value}"),
        }
    }
}

pub type StatusFilter = Selection<OrderStatus>;
pub type PriorityFilter = Selection<OrderPriority>;

/// The three criteria of the order browser, combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderCriteria {
    pub search: String,
    pub status: StatusFilter,
    pub priority: PriorityFilter,
}

impl OrderCriteria {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: PriorityFilter) -> Self {
        self.priority = priority;
        self
    }

    /// Case-insensitive match on order number, product or customer name.
    /// An empty term matches everything.
    pub fn matches_search(&self, order: &OrderRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        [&order.order_number, &order.product_name, &order.customer_name]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn matches(&self, order: &OrderRecord) -> bool {
        self.matches_search(order)
            && self.status.accepts(&order.status)
            && self.priority.accepts(&order.priority)
    }

    /// Orders passing every criterion, in source order.
    pub fn apply(&self, orders: &[OrderRecord]) -> Vec<OrderRecord> {
        orders.iter().filter(|order| self.matches(order)).cloned().collect()
    }
}
