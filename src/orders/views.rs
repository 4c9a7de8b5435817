// Read-only projections of the filtered order list

use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::str::FromStr;

use crate::orders::types::{OrderRecord, OrderStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    #[default]
    Card,
    Table,
    Kanban,
    Timeline,
}

impl ViewType {
    pub const ALL: [ViewType; 4] = [ViewType::Card, ViewType::Table, ViewType::Kanban, ViewType::Timeline];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewType::Card => "card",
            ViewType::Table => "table",
            ViewType::Kanban => "kanban",
            ViewType::Timeline => "timeline",
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ViewType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ViewType::ALL
            .into_iter()
            .find(|view| view.as_str() == wanted || format!("{}s", view.as_str()) == wanted)
            .ok_or_else(|| format!("unknown view: {s} (expected card, table, kanban or timeline)"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KanbanColumn<'a> {
    pub status: OrderStatus,
    pub orders: Vec<&'a OrderRecord>,
}

/// Orders grouped into one column per status, in lifecycle order.
#[derive(Debug, Clone, PartialEq)]
pub struct KanbanBoard<'a> {
    pub columns: Vec<KanbanColumn<'a>>,
}

impl<'a> KanbanBoard<'a> {
    pub fn column(&self, status: OrderStatus) -> &[&'a OrderRecord] {
        self.columns
            .iter()
            .find(|column| column.status == status)
            .map(|column| column.orders.as_slice())
            .unwrap_or(&[])
    }

    pub fn total(&self) -> usize {
        self.columns.iter().map(|column| column.orders.len()).sum()
    }
}

/// Stable partition by status. Relative order inside a column follows the input.
pub fn kanban(orders: &[OrderRecord]) -> KanbanBoard<'_> {
    let mut columns: Vec<KanbanColumn<'_>> = OrderStatus::ALL
        .into_iter()
        .map(|status| KanbanColumn {
            status,
            orders: Vec::new(),
        })
        .collect();

    for order in orders {
        if let Some(column) = columns.iter_mut().find(|column| column.status == order.status) {
            column.orders.push(order);
        }
    }

    KanbanBoard { columns }
}

/// Newest first by creation date; orders created the same day keep input order.
pub fn timeline(orders: &[OrderRecord]) -> Vec<&OrderRecord> {
    let mut sorted: Vec<&OrderRecord> = orders.iter().collect();
    sorted.sort_by(|a, b| b.created_date.cmp(&a.created_date));
    sorted
}

fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

pub fn render(view: ViewType, orders: &[OrderRecord]) -> String {
    if orders.is_empty() {
        return "📋 No orders match the current filters\n".to_string();
    }
    match view {
        ViewType::Card => render_cards(orders),
        ViewType::Table => render_table(orders),
        ViewType::Kanban => render_kanban(&kanban(orders)),
        ViewType::Timeline => render_timeline(orders),
    }
}

pub fn render_cards(orders: &[OrderRecord]) -> String {
    let mut out = String::new();
    for order in orders {
        let _ = writeln!(out, "📦 {} [{}] [{}]", order.order_number, order.status, order.priority);
        let _ = writeln!(out, "   {}", order.product_name);
        let _ = writeln!(out, "   👤 {} <{}>", order.customer_name, order.customer_email);
        let _ = writeln!(
            out,
            "   🚚 {}, {} → {}, {}",
            order.from_address.city, order.from_address.state, order.to_address.city, order.to_address.state
        );
        let _ = writeln!(
            out,
            "   📅 Created {}  ·  Est. delivery {}",
            order.created_date, order.estimated_delivery
        );
        let _ = writeln!(out, "   💰 {}", money(order.total_amount));
        if let Some(tracking) = &order.tracking_number {
            let _ = writeln!(out, "   🔗 Tracking: {tracking}");
        }
        out.push('\n');
    }
    out
}

pub fn render_table(orders: &[OrderRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<4} {:<14} {:<22} {:<14} {:<11} {:<8} {:>10}",
        "ID", "ORDER", "PRODUCT", "CUSTOMER", "STATUS", "PRIORITY", "AMOUNT"
    );
    for order in orders {
        let _ = writeln!(
            out,
            "{:<4} {:<14} {:<22} {:<14} {:<11} {:<8} {:>10}",
            order.id,
            order.order_number,
            order.product_name,
            order.customer_name,
            order.status.as_str(),
            order.priority.as_str(),
            money(order.total_amount)
        );
    }
    out
}

pub fn render_kanban(board: &KanbanBoard<'_>) -> String {
    let mut out = String::new();
    for column in &board.columns {
        let _ = writeln!(out, "── {} ({}) ──", column.status.title(), column.orders.len());
        if column.orders.is_empty() {
            let _ = writeln!(out, "   No orders in {}", column.status.title().to_lowercase());
        }
        for order in &column.orders {
            let _ = writeln!(
                out,
                "   {} · {} · {} [{}]",
                order.order_number,
                order.product_name,
                money(order.total_amount),
                order.priority
            );
        }
    }
    out
}

pub fn render_timeline(orders: &[OrderRecord]) -> String {
    let mut out = String::new();
    for order in timeline(orders) {
        let _ = writeln!(
            out,
            "● {}  {} — {} [{}] [{}]",
            order.created_date, order.order_number, order.product_name, order.status, order.priority
        );
        let _ = writeln!(
            out,
            "│   {} · Amount: {} · Delivery: {}",
            order.customer_name,
            money(order.total_amount),
            order.estimated_delivery
        );
    }
    out
}
