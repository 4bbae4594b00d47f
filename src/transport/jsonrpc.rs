// JSON-RPC transport layer implementation
// This file implements the JSON-RPC client used to query the
// upstream Ethereum node over HTTP
//
// Numan Thabit 2025 Nov

use crate::metrics::{REQ_ERRORS, REQ_LATENCY};
use reqwest::Client;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("provider error: {0}")]
    Provider(String),
}

#[derive(Debug, Clone)]
pub struct JsonRpc {
    http: Client,
    url: String,
}

impl JsonRpc {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            url: url.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.url
    }

    /// `eth_chainId`, decoded from its hex quantity.
    pub async fn chain_id(&self) -> Result<u64, RpcError> {
        let result = self.call("eth_chainId", json!([])).await?;
        let quantity = result
            .as_str()
            .ok_or_else(|| RpcError::Provider(format!("chain id is not a string: {result}")))?;
        parse_quantity(quantity)
    }

    async fn call(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, RpcError> {
        let _timer = REQ_LATENCY.with_label_values(&["node", method]).start_timer();
        let res = self.send(method, params).await;
        if res.is_err() {
            REQ_ERRORS.with_label_values(&["node", method]).inc();
        }
        res
    }

    async fn send(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, RpcError> {
        let payload = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });
        let resp = self
            .http
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| RpcError::Transport(format!("jsonrpc send: {e}")))?;
        if !resp.status().is_success() {
            return Err(RpcError::Provider(format!("http {}", resp.status())));
        }
        let mut body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| RpcError::Transport(format!("json parse: {e}")))?;
        if let Some(err) = body.get("error") {
            return Err(RpcError::Provider(err.to_string()));
        }
        match body.get_mut("result") {
            Some(result) => Ok(result.take()),
            None => Err(RpcError::Provider("response has no result".to_string())),
        }
    }
}

/// Parse an Ethereum hex quantity such as `0x1`.
pub fn parse_quantity(quantity: &str) -> Result<u64, RpcError> {
    let digits = quantity
        .strip_prefix("0x")
        .or_else(|| quantity.strip_prefix("0X"))
        .ok_or_else(|| RpcError::Provider(format!("quantity missing 0x prefix: {quantity}")))?;
    u64::from_str_radix(digits, 16)
        .map_err(|e| RpcError::Provider(format!("invalid quantity {quantity}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_quantities() {
        assert_eq!(parse_quantity("0x1").unwrap(), 1);
        assert_eq!(parse_quantity("0xaa36a7").unwrap(), 11_155_111);
        assert_eq!(parse_quantity("0X89").unwrap(), 137);
    }

    #[test]
    fn rejects_bad_quantities() {
        assert!(parse_quantity("1").is_err());
        assert!(parse_quantity("0x").is_err());
        assert!(parse_quantity("0xzz").is_err());
    }
}
