use serde::Deserialize;
use std::env;
use till_checkout::{DiscountBase, DiscountFailurePolicy};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub discount: DiscountConfig,
    #[serde(default)]
    pub checkout: CheckoutRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Path to the JSON inventory file, loaded once at startup
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DiscountConfig {
    pub endpoint: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    500
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CheckoutRules {
    #[serde(default)]
    pub on_discount_failure: DiscountFailurePolicy,
    #[serde(default)]
    pub discount_base: DiscountBase,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment and local overrides are both optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `TILL_SERVER__PORT=9090` overrides `server.port`
            .add_source(config::Environment::with_prefix("TILL").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
