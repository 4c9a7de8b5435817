use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::orders::ViewType;

/// Main configuration structure for shipdesk
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ShipdeskConfig {
    /// Logging settings
    pub observability: ObservabilityConfig,
    /// Simulated backend behaviour
    pub backend: BackendConfig,
    /// Order browser settings
    pub orders: OrdersConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
    /// Emit JSON log lines instead of human-readable ones
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            json_logs: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Delay before a product save completes
    pub submit_latency_ms: u64,
    /// Delay before the order list arrives
    pub load_latency_ms: u64,
    /// Probability (0.0-1.0) that a simulated call fails
    pub failure_rate: f64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            submit_latency_ms: 1000,
            load_latency_ms: 1000,
            failure_rate: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OrdersConfig {
    /// View used when --view is not given
    pub default_view: ViewType,
}

impl ShipdeskConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration files (shipdesk.toml, .shipdesk-rc)
    /// 3. Environment variables (prefixed with SHIPDESK_, nested keys split on `__`)
    pub fn load() -> Result<Self> {
        let mut builder = Config::builder();

        if Path::new("shipdesk.toml").exists() {
            builder = builder.add_source(File::with_name("shipdesk"));
        }

        if Path::new(".shipdesk-rc").exists() {
            builder = builder.add_source(File::with_name(".shipdesk-rc").format(config::FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix("SHIPDESK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let shipdesk_config: ShipdeskConfig = config.try_deserialize()?;
        Ok(shipdesk_config)
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<ShipdeskConfig, anyhow::Error>> =
    std::sync::LazyLock::new(|| {
        let _ = ShipdeskConfig::load_env_file();
        ShipdeskConfig::load()
    });

/// Get the global configuration
pub fn config() -> Result<&'static ShipdeskConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}
