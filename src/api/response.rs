// Response encoding
// Serializes a quote or a failure into the stable JSON body
//
// Numan Thabit 2025 Nov

use crate::errors::QuoteError;
use crate::quoter::QuoteResult;
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

pub const CONTENT_TYPE_JSON: &str = "text/json";

/// Exactly one of the two shapes; never both.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Quote(QuoteResult),
    Error { error: String },
}

impl From<Result<QuoteResult, QuoteError>> for ResponseBody {
    fn from(result: Result<QuoteResult, QuoteError>) -> Self {
        match result {
            Ok(quote) => ResponseBody::Quote(quote),
            Err(err) => ResponseBody::Error {
                error: err.to_string(),
            },
        }
    }
}

/// Always 200; failures are signalled by the body shape only.
pub fn encode(result: Result<QuoteResult, QuoteError>) -> Response {
    let body = ResponseBody::from(result);
    let json = serde_json::to_string(&body)
        .unwrap_or_else(|_| r#"{"error":"response encoding failed"}"#.to_string());
    (StatusCode::OK, [(CONTENT_TYPE, CONTENT_TYPE_JSON)], json).into_response()
}
