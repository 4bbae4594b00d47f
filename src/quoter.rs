// Quote orchestration module
// Resolves trade direction from a swap request, invokes the routing engine
// once with the shared policy and normalizes the resulting route
//
// Numan Thabit 2025 Nov

use crate::chain::MAINNET_CHAIN_ID;
use crate::errors::QuoteError;
use crate::metrics::{QUOTES, QUOTE_LATENCY};
use crate::routing::{
    CurrencyAmount, RoutePolicy, RoutingEngine, SwapOptions, Token, TradeType,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapKind {
    Sell,
    Buy,
}

impl FromStr for SwapKind {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sell" => Ok(SwapKind::Sell),
            "buy" => Ok(SwapKind::Buy),
            other => Err(QuoteError::InvalidSwapType(other.to_string())),
        }
    }
}

/// Swap intent as received on the wire. `kind` is validated by the
/// [`Quoter`]; the other fields are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SwapRequest {
    #[serde(rename = "type")]
    pub kind: String,
    /// address
    pub token_in: String,
    /// address
    pub token_out: String,
    /// integer base units
    pub amount: String,
    /// address
    pub recipient: String,
}

/// Normalized quote returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteResult {
    /// integer base units
    pub quote: String,
    /// integer
    pub gas: String,
    pub call_data: String,
    /// integer native-currency base units
    pub call_value: String,
}

/// Arguments of a single routing call derived from a [`SwapRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePlan {
    pub amount: CurrencyAmount,
    pub quote_currency: Token,
    pub trade_type: TradeType,
    pub swap_options: SwapOptions,
}

/// Immutable orchestration context shared by all requests.
pub struct Quoter {
    engine: Arc<dyn RoutingEngine>,
    policy: Arc<RoutePolicy>,
    chain_id: u64,
    timeout: Option<Duration>,
}

impl std::fmt::Debug for Quoter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Quoter")
            .field("policy", &self.policy)
            .field("chain_id", &self.chain_id)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Quoter {
    pub fn new(engine: Arc<dyn RoutingEngine>, policy: Arc<RoutePolicy>) -> Self {
        Self {
            engine,
            policy,
            chain_id: MAINNET_CHAIN_ID,
            timeout: None,
        }
    }

    /// Bound each routing call; `None` waits indefinitely.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn policy(&self) -> &RoutePolicy {
        &self.policy
    }

    /// Resolve trade direction and currency roles. Fails on an unknown swap
    /// type before any token is built.
    pub fn plan(&self, req: &SwapRequest) -> Result<RoutePlan, QuoteError> {
        let kind = SwapKind::from_str(&req.kind)?;

        // all amounts are base units, so decimals stay at zero
        let token_in = Token::new(self.chain_id, req.token_in.as_str(), 0);
        let token_out = Token::new(self.chain_id, req.token_out.as_str(), 0);

        let (amount, quote_currency, trade_type) = match kind {
            SwapKind::Sell => (
                CurrencyAmount::from_raw_amount(token_in, req.amount.as_str()),
                token_out,
                TradeType::ExactInput,
            ),
            SwapKind::Buy => (
                CurrencyAmount::from_raw_amount(token_out, req.amount.as_str()),
                token_in,
                TradeType::ExactOutput,
            ),
        };

        Ok(RoutePlan {
            amount,
            quote_currency,
            trade_type,
            swap_options: SwapOptions::for_recipient(req.recipient.as_str()),
        })
    }

    /// Produce a quote for one swap request. Issues exactly one routing call
    /// and never returns a partial result.
    pub async fn quote(&self, req: &SwapRequest) -> Result<QuoteResult, QuoteError> {
        let _timer = QUOTE_LATENCY.start_timer();
        let res = self.quote_inner(req).await;
        let outcome = match &res {
            Ok(_) => "ok",
            Err(err) => err.kind(),
        };
        QUOTES.with_label_values(&[outcome]).inc();
        res
    }

    async fn quote_inner(&self, req: &SwapRequest) -> Result<QuoteResult, QuoteError> {
        let plan = self.plan(req)?;
        debug!(
            trade_type = ?plan.trade_type,
            amount = %plan.amount.raw,
            amount_token = %plan.amount.currency.address,
            quote_token = %plan.quote_currency.address,
            "requesting route"
        );

        let call = self.engine.route(
            &plan.amount,
            &plan.quote_currency,
            plan.trade_type,
            &plan.swap_options,
            &self.policy,
        );
        let routed = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call).await.map_err(|_| {
                QuoteError::UpstreamFailure(format!(
                    "routing timed out after {} ms",
                    limit.as_millis()
                ))
            })?,
            None => call.await,
        };

        let route = routed?.ok_or(QuoteError::NoRouteFound)?;
        let params = route
            .method_parameters
            .ok_or(QuoteError::RouteNotExecutable)?;

        Ok(QuoteResult {
            quote: route.quote.to_exact()?,
            gas: route.estimated_gas_used.to_string(),
            call_data: params.calldata,
            call_value: params.value,
        })
    }
}
