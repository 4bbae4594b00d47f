// Request decoding
// Buffers the whole body and parses it into a SwapRequest
//
// Numan Thabit 2025 Nov

use crate::errors::QuoteError;
use crate::quoter::SwapRequest;
use axum::body::{Body, Bytes};

/// Read the body to the end, then decode. Nothing is parsed incrementally.
pub async fn read_swap_request(body: Body) -> Result<SwapRequest, QuoteError> {
    let bytes: Bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|e| QuoteError::MalformedRequest(format!("read body: {e}")))?;
    decode_swap_request(&bytes)
}

/// Strict decode: UTF-8 text holding a single JSON object with every
/// required string field. The `type` value is not checked here.
pub fn decode_swap_request(bytes: &[u8]) -> Result<SwapRequest, QuoteError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| QuoteError::MalformedRequest(format!("body is not utf-8: {e}")))?;
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| QuoteError::MalformedRequest(e.to_string()))?;
    if !value.is_object() {
        return Err(QuoteError::MalformedRequest(
            "expected a JSON object".to_string(),
        ));
    }
    serde_json::from_value(value).map_err(|e| QuoteError::MalformedRequest(e.to_string()))
}
