// HTTP routing engine binding
// Forwards each routing call to an external routing service as a JSON POST
//
// Numan Thabit 2025 Nov

use super::{CurrencyAmount, Route, RoutePolicy, RoutingEngine, SwapOptions, Token, TradeType};
use crate::errors::RoutingError;
use crate::metrics::{REQ_ERRORS, REQ_LATENCY};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct RouteCall<'a> {
    amount: &'a CurrencyAmount,
    quote_currency: &'a Token,
    trade_type: TradeType,
    swap_options: &'a SwapOptions,
    config: &'a RoutePolicy,
}

#[derive(Debug, Clone)]
pub struct HttpRoutingEngine {
    http: Client,
    url: String,
}

impl HttpRoutingEngine {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            url: url.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.url
    }

    async fn post(&self, call: &RouteCall<'_>) -> Result<Option<Route>, RoutingError> {
        let resp = self
            .http
            .post(&self.url)
            .json(call)
            .send()
            .await
            .map_err(|e| RoutingError::Transport(format!("route send: {e}")))?;
        if !resp.status().is_success() {
            return Err(RoutingError::Provider(format!("http {}", resp.status())));
        }
        // `null` means no viable route.
        resp.json::<Option<Route>>()
            .await
            .map_err(|e| RoutingError::Provider(format!("decode route: {e}")))
    }
}

#[async_trait]
impl RoutingEngine for HttpRoutingEngine {
    async fn route(
        &self,
        amount: &CurrencyAmount,
        quote_currency: &Token,
        trade_type: TradeType,
        swap_options: &SwapOptions,
        policy: &RoutePolicy,
    ) -> Result<Option<Route>, RoutingError> {
        let call = RouteCall {
            amount,
            quote_currency,
            trade_type,
            swap_options,
            config: policy,
        };
        let _timer = REQ_LATENCY.with_label_values(&["router", "route"]).start_timer();
        let res = self.post(&call).await;
        if res.is_err() {
            REQ_ERRORS.with_label_values(&["router", "route"]).inc();
        }
        res
    }
}
