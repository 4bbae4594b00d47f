// Metrics and observability module
// This file handles collection of quote outcomes and upstream call
// latencies for the gateway
//
// Numan Thabit 2025 Nov

use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec, register_histogram, register_histogram_vec, CounterVec, Histogram,
    HistogramVec,
};

pub static REQ_LATENCY: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "gateway_upstream_latency_seconds",
        "latency for upstream calls",
        &["service", "method"]
    )
    .unwrap()
});

pub static REQ_ERRORS: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "gateway_upstream_errors_total",
        "errors by upstream",
        &["service", "method"]
    )
    .unwrap()
});

pub static QUOTES: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "gateway_quote_requests_total",
        "quote requests by outcome",
        &["outcome"]
    )
    .unwrap()
});

pub static QUOTE_LATENCY: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "gateway_quote_latency_seconds",
        "end-to-end orchestration latency per quote"
    )
    .unwrap()
});
