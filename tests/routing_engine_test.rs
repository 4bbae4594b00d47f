//! Tests for the HTTP routing engine binding against a stub routing service

use axum::{http::StatusCode, routing::post, Json, Router};
use quote_gateway::errors::RoutingError;
use quote_gateway::routing::{
    CurrencyAmount, HttpRoutingEngine, RoutePolicy, RoutingEngine, SwapOptions, Token, TradeType,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

async fn spawn_stub(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/route")
}

fn call_args() -> (CurrencyAmount, Token, SwapOptions) {
    let token_in = Token::new(1, "0xIn", 0);
    let token_out = Token::new(1, "0xOut", 0);
    (
        CurrencyAmount::from_raw_amount(token_in, "500000"),
        token_out,
        SwapOptions::for_recipient("0xRecipient"),
    )
}

#[tokio::test]
async fn test_posts_call_and_decodes_route() {
    let app = Router::new().route(
        "/route",
        post(|Json(call): Json<Value>| async move {
            // echo parts of the call back so the test can check the wire shape
            assert_eq!(call["trade_type"], "exact_input");
            assert_eq!(call["amount"]["raw"], "500000");
            assert_eq!(call["amount"]["currency"]["address"], "0xIn");
            assert_eq!(call["quote_currency"]["address"], "0xOut");
            assert_eq!(call["swap_options"]["deadline"], 4_294_967_295u64);
            assert_eq!(call["swap_options"]["slippage_tolerance"]["denominator"], 10_000);
            assert_eq!(call["config"]["protocols"], json!(["V3"]));
            assert_eq!(call["config"]["max_swaps_per_path"], 3);
            Json(json!({
                "quote": {"currency": call["quote_currency"], "raw": "999"},
                "estimated_gas_used": 120000,
                "method_parameters": {"calldata": "0xdead", "value": "0x00"},
            }))
        }),
    );
    let engine = HttpRoutingEngine::new(spawn_stub(app).await);
    let (amount, quote_currency, opts) = call_args();

    let route = engine
        .route(&amount, &quote_currency, TradeType::ExactInput, &opts, &RoutePolicy::default())
        .await
        .unwrap()
        .expect("route");

    assert_eq!(route.quote.raw, "999");
    assert_eq!(route.quote.currency, quote_currency);
    assert_eq!(route.estimated_gas_used, 120_000);
    let params = route.method_parameters.expect("method parameters");
    assert_eq!(params.calldata, "0xdead");
    assert_eq!(params.value, "0x00");
}

#[tokio::test]
async fn test_null_means_no_route() {
    let app = Router::new().route("/route", post(|| async { Json(Value::Null) }));
    let engine = HttpRoutingEngine::new(spawn_stub(app).await);
    let (amount, quote_currency, opts) = call_args();

    let route = engine
        .route(&amount, &quote_currency, TradeType::ExactOutput, &opts, &RoutePolicy::default())
        .await
        .unwrap();

    assert!(route.is_none());
}

#[tokio::test]
async fn test_server_error_is_provider_error() {
    let app = Router::new().route(
        "/route",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let engine = HttpRoutingEngine::new(spawn_stub(app).await);
    let (amount, quote_currency, opts) = call_args();

    let err = engine
        .route(&amount, &quote_currency, TradeType::ExactInput, &opts, &RoutePolicy::default())
        .await
        .unwrap_err();

    assert!(matches!(err, RoutingError::Provider(ref msg) if msg.contains("500")));
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let engine = HttpRoutingEngine::new(format!("http://{addr}/route"));
    let (amount, quote_currency, opts) = call_args();

    let err = engine
        .route(&amount, &quote_currency, TradeType::ExactInput, &opts, &RoutePolicy::default())
        .await
        .unwrap_err();

    assert!(matches!(err, RoutingError::Transport(_)));
}
