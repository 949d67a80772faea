use crate::system::auth::role_store::ROLE_STORAGE_KEY;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub orders: OrdersConfig,
    #[serde(default)]
    pub overview: OverviewConfig,
    #[serde(default)]
    pub inventory: InventoryConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AuthConfig {
    /// localStorage key holding the selected role
    pub storage_key: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct OrdersConfig {
    pub page_size: i64,
    pub record_count: usize,
    pub history_days: i64,
    /// Simulated fetch latency
    pub latency_ms: u32,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct OverviewConfig {
    pub trend_days: i64,
    pub latency_ms: u32,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct InventoryConfig {
    /// Simulated save latency of an accepted intake
    pub intake_latency_ms: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            storage_key: ROLE_STORAGE_KEY.to_string(),
        }
    }
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self {
            page_size: 15,
            record_count: 500,
            history_days: 30,
            latency_ms: 600,
        }
    }
}

impl Default for OverviewConfig {
    fn default() -> Self {
        Self {
            trend_days: 30,
            latency_ms: 800,
        }
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            intake_latency_ms: 800,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            auth: AuthConfig::default(),
            orders: OrdersConfig::default(),
            overview: OverviewConfig::default(),
            inventory: InventoryConfig::default(),
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[auth]
storage_key = "nova_hq_role"

[orders]
page_size = 15
record_count = 500
history_days = 30
latency_ms = 600

[overview]
trend_days = 30
latency_ms = 800

[inventory]
intake_latency_ms = 800
"#;

impl DashboardConfig {
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: DashboardConfig = toml::from_str(contents)?;
        Ok(config)
    }
}

/// Load the embedded configuration
pub fn load_config() -> anyhow::Result<DashboardConfig> {
    log::info!("Using default embedded configuration");
    DashboardConfig::from_toml_str(DEFAULT_CONFIG)
}
