// Backend ports for the entry form and the order browser
//
// The core only ever talks to these traits. `SimulatedBackend` stands in for a
// real service: it waits a fixed latency, optionally fails at random, and keeps
// everything in memory.

use async_trait::async_trait;
use rand::Rng;
use std::sync::Mutex;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

use crate::config::BackendConfig;
use crate::orders::mock::sample_orders;
use crate::orders::OrderRecord;
use crate::product::ProductRecord;

pub type OrderId = String;

/// A simulated save or load did not complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    #[error("failed to save product: {0}")]
    SaveFailed(String),
    #[error("failed to load orders: {0}")]
    LoadFailed(String),
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Store a validated product and return the id assigned to it
    async fn create_product(&self, product: &ProductRecord) -> Result<OrderId, OperationError>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait OrderSource: Send + Sync {
    /// Fetch every open order
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OperationError>;
}

#[derive(Debug)]
pub struct SimulatedBackend {
    submit_latency: Duration,
    load_latency: Duration,
    failure_rate: f64,
    orders: Vec<OrderRecord>,
    created: Mutex<Vec<(OrderId, ProductRecord)>>,
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::from_config(&BackendConfig::default())
    }
}

impl SimulatedBackend {
    pub fn new(submit_latency: Duration, load_latency: Duration) -> Self {
        Self {
            submit_latency,
            load_latency,
            failure_rate: 0.0,
            orders: sample_orders(),
            created: Mutex::new(Vec::new()),
        }
    }

    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new(
            Duration::from_millis(config.submit_latency_ms),
            Duration::from_millis(config.load_latency_ms),
        )
        .with_failure_rate(config.failure_rate)
    }

    /// Instant responses, used by tests.
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn with_failure_rate(mut self, failure_rate: f64) -> Self {
        self.failure_rate = failure_rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_orders(mut self, orders: Vec<OrderRecord>) -> Self {
        self.orders = orders;
        self
    }

    /// Products accepted so far, oldest first
    pub fn created_products(&self) -> Vec<(OrderId, ProductRecord)> {
        self.created
            .lock()
            .map(|created| created.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    fn roll_failure(&self) -> bool {
        self.failure_rate > 0.0 && rand::rng().random_bool(self.failure_rate)
    }
}

#[async_trait]
impl ProductService for SimulatedBackend {
    async fn create_product(&self, product: &ProductRecord) -> Result<OrderId, OperationError> {
        let fail = self.roll_failure();
        tokio::time::sleep(self.submit_latency).await;

        if fail {
            warn!(sku = %product.sku, "Simulated product save failure");
            return Err(OperationError::SaveFailed("simulated backend failure".to_string()));
        }

        let id = format!("PRD-{}", Uuid::new_v4());
        info!(
            product.id = %id,
            product.name = %product.name,
            product.sku = %product.sku,
            order.number = %product.order_number,
            "Product submitted"
        );

        self.created
            .lock()
            .map_err(|_| OperationError::SaveFailed("backend state unavailable".to_string()))?
            .push((id.clone(), product.clone()));

        Ok(id)
    }
}

#[async_trait]
impl OrderSource for SimulatedBackend {
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OperationError> {
        let fail = self.roll_failure();
        tokio::time::sleep(self.load_latency).await;

        if fail {
            warn!("Simulated order load failure");
            return Err(OperationError::LoadFailed("simulated backend failure".to_string()));
        }

        info!(count = self.orders.len(), "Orders loaded");
        Ok(self.orders.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_create_product_records_submission() {
        let backend = SimulatedBackend::default();
        let product = ProductRecord {
            name: "Smart Watch".to_string(),
            ..Default::default()
        };

        let id = backend.create_product(&product).await.unwrap();

        assert!(id.starts_with("PRD-"));
        let created = backend.created_products();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].0, id);
        assert_eq!(created[0].1.name, "Smart Watch");
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_latency_is_observed() {
        let backend = SimulatedBackend::new(Duration::from_millis(1000), Duration::from_millis(250));
        let start = tokio::time::Instant::now();

        backend.list_orders().await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(250));
    }

    #[tokio::test]
    async fn test_certain_failure() {
        let backend = SimulatedBackend::immediate().with_failure_rate(1.0);

        let save = backend.create_product(&ProductRecord::default()).await;
        let load = backend.list_orders().await;

        assert!(matches!(save, Err(OperationError::SaveFailed(_))));
        assert!(matches!(load, Err(OperationError::LoadFailed(_))));
        assert!(backend.created_products().is_empty());
    }

    #[tokio::test]
    async fn test_default_orders_are_the_samples() {
        let orders = SimulatedBackend::immediate().list_orders().await.unwrap();
        assert_eq!(orders.len(), 4);
        assert_eq!(orders[1].product_name, "Gaming Laptop");
    }

    #[test]
    fn test_failure_rate_is_clamped() {
        let backend = SimulatedBackend::immediate().with_failure_rate(7.5);
        assert_eq!(backend.failure_rate, 1.0);
    }
}
