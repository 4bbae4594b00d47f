// Routing module - the seam to the external route-finding engine
// This file defines the typed routing call (amount, quote currency, trade
// direction, swap options) and the route it produces
//
// Numan Thabit 2025 Nov

pub mod policy;
pub mod remote;

pub use policy::{Percent, Protocol, ProtocolPoolSelection, RoutePolicy, SwapOptions};
pub use remote::HttpRoutingEngine;

use crate::errors::{QuoteError, RoutingError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// An ERC-20 token on a specific chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub chain_id: u64,
    pub address: String,
    pub decimals: u8,
}

impl Token {
    pub fn new(chain_id: u64, address: impl Into<String>, decimals: u8) -> Self {
        Self {
            chain_id,
            address: address.into(),
            decimals,
        }
    }
}

/// An amount of `currency` in base units. `raw` is an arbitrary-precision
/// integer string, checked only when rendered with [`CurrencyAmount::to_exact`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyAmount {
    pub currency: Token,
    pub raw: String,
}

impl CurrencyAmount {
    pub fn from_raw_amount(currency: Token, raw: impl Into<String>) -> Self {
        Self {
            currency,
            raw: raw.into(),
        }
    }

    /// Render as a decimal string scaled by the currency decimals, with
    /// leading integer zeros and trailing fractional zeros removed. Fails
    /// unless `raw` is a non-empty run of ASCII digits.
    pub fn to_exact(&self) -> Result<String, QuoteError> {
        if self.raw.is_empty() || !self.raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(QuoteError::UpstreamFailure(format!(
                "invalid quote amount {:?}",
                self.raw
            )));
        }
        let decimals = usize::from(self.currency.decimals);
        let padded = format!("{:0>width$}", self.raw, width = decimals + 1);
        // all ASCII, so byte offsets are char boundaries
        let (int_part, frac_part) = padded.split_at(padded.len() - decimals);
        let int_part = match int_part.trim_start_matches('0') {
            "" => "0",
            trimmed => trimmed,
        };
        let frac_part = frac_part.trim_end_matches('0');
        if frac_part.is_empty() {
            Ok(int_part.to_string())
        } else {
            Ok(format!("{int_part}.{frac_part}"))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeType {
    /// Input amount fixed, output discovered.
    ExactInput,
    /// Output amount fixed, input discovered.
    ExactOutput,
}

/// Transaction parameters needed to submit the swap on-chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodParameters {
    pub calldata: String,
    pub value: String,
}

/// Best route returned by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub quote: CurrencyAmount,
    pub estimated_gas_used: u64,
    pub method_parameters: Option<MethodParameters>,
}

/// External route-finding capability. Implementations must tolerate
/// concurrent calls sharing one `RoutePolicy`.
#[async_trait]
pub trait RoutingEngine: Send + Sync {
    /// Best route for `amount`, quoted in `quote_currency`, or `None` when no
    /// viable route exists.
    async fn route(
        &self,
        amount: &CurrencyAmount,
        quote_currency: &Token,
        trade_type: TradeType,
        swap_options: &SwapOptions,
        policy: &RoutePolicy,
    ) -> Result<Option<Route>, RoutingError>;
}
