// Chain validation module
// Confirms at startup that the configured node serves the supported network
//
// Numan Thabit 2025 Nov

use crate::errors::StartupError;
use crate::transport::JsonRpc;
use tracing::info;

/// Ethereum mainnet, the only network quotes are served for.
pub const MAINNET_CHAIN_ID: u64 = 1;

/// Query the node once and fail unless it reports `expected`. No retry.
pub async fn ensure_chain(rpc: &JsonRpc, expected: u64) -> Result<(), StartupError> {
    let actual = rpc
        .chain_id()
        .await
        .map_err(|e| StartupError::NodeUnreachable(format!("{}: {e}", rpc.endpoint())))?;
    if actual != expected {
        return Err(StartupError::WrongNetwork { expected, actual });
    }
    info!(node = %rpc.endpoint(), chain_id = actual, "node network verified");
    Ok(())
}
