// Configuration management module
// This file handles loading and parsing of configuration settings
// from environment variables
//
// Numan Thabit 2025 Nov

use crate::errors::StartupError;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Upstream Ethereum node, e.g. https://mainnet.infura.io/v3/<key>
    pub node_url: Option<Url>,
    /// Routing service that finds the best route for a swap
    pub router_url: Option<Url>,
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Upper bound on a single routing call (unset = wait indefinitely)
    pub quote_timeout_ms: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, StartupError> {
        Self::from_source(None)
    }

    /// Load from an explicit variable map instead of the process environment.
    pub fn from_map(vars: HashMap<String, String>) -> Result<Self, StartupError> {
        Self::from_source(Some(vars))
    }

    fn from_source(vars: Option<HashMap<String, String>>) -> Result<Self, StartupError> {
        let cfg = config::Config::builder()
            .set_default("host", DEFAULT_HOST)
            .and_then(|b| b.set_default("port", i64::from(DEFAULT_PORT)))
            .map_err(|e| StartupError::InvalidConfig(e.to_string()))?
            .add_source(config::Environment::default().try_parsing(true).source(vars))
            .build()
            .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
        let app: Self = cfg
            .try_deserialize()
            .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
        if app.quote_timeout_ms == Some(0) {
            return Err(StartupError::InvalidConfig(
                "QUOTE_TIMEOUT_MS must be positive; unset it to wait indefinitely".to_string(),
            ));
        }
        Ok(app)
    }

    pub fn node_url(&self) -> Result<&Url, StartupError> {
        self.node_url.as_ref().ok_or(StartupError::MissingNodeUrl)
    }

    pub fn router_url(&self) -> Result<&Url, StartupError> {
        self.router_url.as_ref().ok_or(StartupError::MissingRouterUrl)
    }

    pub fn quote_timeout(&self) -> Option<Duration> {
        self.quote_timeout_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_host_and_port() {
        let cfg = AppConfig::from_map(vars(&[("NODE_URL", "http://127.0.0.1:8545")])).unwrap();
        assert_eq!(cfg.host, "localhost");
        assert_eq!(cfg.port, 8080);
        assert!(cfg.quote_timeout().is_none());
        assert_eq!(cfg.node_url().unwrap().as_str(), "http://127.0.0.1:8545/");
    }

    #[test]
    fn reads_overrides() {
        let cfg = AppConfig::from_map(vars(&[
            ("NODE_URL", "http://node:8545"),
            ("ROUTER_URL", "http://router:3000/route"),
            ("HOST", "0.0.0.0"),
            ("PORT", "9090"),
            ("QUOTE_TIMEOUT_MS", "2500"),
        ]))
        .unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 9090);
        assert_eq!(cfg.quote_timeout(), Some(Duration::from_millis(2500)));
        assert_eq!(cfg.router_url().unwrap().path(), "/route");
    }

    #[test]
    fn missing_node_url_is_reported() {
        let cfg = AppConfig::from_map(HashMap::new()).unwrap();
        assert!(matches!(cfg.node_url(), Err(StartupError::MissingNodeUrl)));
        assert!(matches!(cfg.router_url(), Err(StartupError::MissingRouterUrl)));
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = AppConfig::from_map(vars(&[("QUOTE_TIMEOUT_MS", "0")])).unwrap_err();
        assert!(matches!(err, StartupError::InvalidConfig(ref msg) if msg.contains("QUOTE_TIMEOUT_MS")));
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = AppConfig::from_map(vars(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, StartupError::InvalidConfig(_)));
    }
}
