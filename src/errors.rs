// Error types and error handling module
// This file defines the startup and per-request error taxonomies
// for the quote gateway
//
// Numan Thabit 2025 Nov

use thiserror::Error;

/// Fatal conditions detected before the listener binds. Any of these
/// terminates the process.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("need NODE_URL env variable")]
    MissingNodeUrl,
    #[error("need ROUTER_URL env variable")]
    MissingRouterUrl,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("node unreachable: {0}")]
    NodeUnreachable(String),
    #[error("node is not on mainnet (expected chain id {expected}, got {actual})")]
    WrongNetwork { expected: u64, actual: u64 },
}

/// Request-scoped failures. Rendered into the `error` field of the
/// response body; never affect other requests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuoteError {
    #[error("malformed request: {0}")]
    MalformedRequest(String),
    #[error("bad request type")]
    InvalidSwapType(String),
    #[error("no route")]
    NoRouteFound,
    #[error("no method parameters")]
    RouteNotExecutable,
    #[error("routing engine failure: {0}")]
    UpstreamFailure(String),
}

impl QuoteError {
    /// Stable label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            QuoteError::MalformedRequest(_) => "malformed_request",
            QuoteError::InvalidSwapType(_) => "invalid_swap_type",
            QuoteError::NoRouteFound => "no_route",
            QuoteError::RouteNotExecutable => "not_executable",
            QuoteError::UpstreamFailure(_) => "upstream_failure",
        }
    }
}

/// Errors raised by a routing engine binding.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("provider error: {0}")]
    Provider(String),
}

impl From<RoutingError> for QuoteError {
    fn from(err: RoutingError) -> Self {
        QuoteError::UpstreamFailure(err.to_string())
    }
}
