// Open Orders - filtering, status updates and view projections

pub mod browser;
pub mod filter;
pub mod mock;
pub mod types;
pub mod views;

pub use browser::{set_status, OrderBrowser, OrderError};
pub use filter::{OrderCriteria, PriorityFilter, Selection, StatusFilter};
pub use types::{OrderAddress, OrderPriority, OrderRecord, OrderStatus};
pub use views::{kanban, timeline, KanbanBoard, KanbanColumn, ViewType};
