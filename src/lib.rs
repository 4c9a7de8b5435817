// shipdesk library - product entry form and open-orders browser
// This exposes the core components for testing and integration

pub mod address;
pub mod backend;
pub mod config;
pub mod notification;
pub mod orders;
pub mod product;
pub mod telemetry;

// Re-export key types for easy access
pub use address::{AddressField, AddressForm, AddressRecord, Side};
pub use backend::{OperationError, OrderId, OrderSource, ProductService, SimulatedBackend};
pub use config::{config, ShipdeskConfig};
pub use notification::{Notification, NotificationCenter, NotificationKind};
pub use orders::{
    OrderBrowser, OrderCriteria, OrderError, OrderPriority, OrderRecord, OrderStatus, Selection,
    ViewType,
};
pub use product::{
    validate, Accepted, Category, ErrorMap, FieldUpdate, FormState, ProductRecord, SubmitError,
    ValidationError,
};
pub use telemetry::{create_session_span, generate_correlation_id, init_telemetry};
