// Router policy module
// Fixed pool-selection limits, protocol set and per-swap options applied to
// every routing call
//
// Numan Thabit 2025 Nov

use serde::{Deserialize, Serialize};

/// Swaps never expire on-chain (u32::MAX seconds).
pub const NO_DEADLINE: u64 = 4_294_967_295;

/// Slippage tolerance of 5 / 10_000 (0.05%).
pub const SLIPPAGE_TOLERANCE: Percent = Percent {
    numerator: 5,
    denominator: 10_000,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Protocol {
    V2,
    V3,
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Percent {
    pub numerator: u64,
    pub denominator: u64,
}

/// Breadth limits for candidate pool selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolPoolSelection {
    pub top_n: u32,
    pub top_n_direct_swaps: u32,
    pub top_n_token_in_out: u32,
    pub top_n_second_hop: u32,
    pub top_n_with_each_base_token: u32,
    pub top_n_with_base_token: u32,
}

impl Default for ProtocolPoolSelection {
    fn default() -> Self {
        Self {
            top_n: 2,
            top_n_direct_swaps: 2,
            top_n_token_in_out: 3,
            top_n_second_hop: 1,
            top_n_with_each_base_token: 3,
            top_n_with_base_token: 5,
        }
    }
}

/// Process-wide routing configuration. Built once at startup and shared
/// read-only by every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePolicy {
    pub protocols: Vec<Protocol>,
    pub v2_pool_selection: ProtocolPoolSelection,
    pub v3_pool_selection: ProtocolPoolSelection,
    pub max_swaps_per_path: u32,
    pub max_splits: u32,
    pub min_splits: u32,
    pub force_cross_protocol: bool,
    pub distribution_percent: u32,
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self {
            protocols: vec![Protocol::V3],
            v2_pool_selection: ProtocolPoolSelection::default(),
            v3_pool_selection: ProtocolPoolSelection::default(),
            max_swaps_per_path: 3,
            max_splits: 1,
            min_splits: 1,
            force_cross_protocol: false,
            distribution_percent: 100,
        }
    }
}

/// Per-request swap settings passed alongside the route request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapOptions {
    pub deadline: u64,
    pub recipient: String,
    pub slippage_tolerance: Percent,
}

impl SwapOptions {
    pub fn for_recipient(recipient: impl Into<String>) -> Self {
        Self {
            deadline: NO_DEADLINE,
            recipient: recipient.into(),
            slippage_tolerance: SLIPPAGE_TOLERANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_single_path_v3() {
        let policy = RoutePolicy::default();
        assert_eq!(policy.protocols, vec![Protocol::V3]);
        assert_eq!(policy.max_swaps_per_path, 3);
        assert_eq!((policy.min_splits, policy.max_splits), (1, 1));
        assert!(!policy.force_cross_protocol);
        assert_eq!(policy.distribution_percent, 100);
        assert_eq!(policy.v3_pool_selection.top_n_with_base_token, 5);
        assert_eq!(policy.v2_pool_selection, policy.v3_pool_selection);
    }

    #[test]
    fn swap_options_use_fixed_deadline_and_slippage() {
        let opts = SwapOptions::for_recipient("0xRecipient");
        assert_eq!(opts.deadline, u64::from(u32::MAX));
        assert_eq!(opts.recipient, "0xRecipient");
        assert_eq!(opts.slippage_tolerance.numerator, 5);
        assert_eq!(opts.slippage_tolerance.denominator, 10_000);
    }
}
