// Quote HTTP API implementation
// A single catch-all endpoint: every request, whatever its method or path,
// runs decode -> quote -> encode on its own task
//
// Numan Thabit 2025 Nov

pub mod request;
pub mod response;

use crate::quoter::Quoter;
use axum::{
    extract::{Request, State},
    response::Response,
    Router as AxumRouter,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Create the HTTP router with the quote endpoint
pub fn create_api_router(quoter: Arc<Quoter>) -> AxumRouter {
    AxumRouter::new()
        .fallback(handle_quote)
        .with_state(quoter)
        .layer(TraceLayer::new_for_http())
}

async fn handle_quote(State(quoter): State<Arc<Quoter>>, req: Request) -> Response {
    let result = match request::read_swap_request(req.into_body()).await {
        Ok(swap) => quoter.quote(&swap).await,
        Err(err) => Err(err),
    };
    if let Err(err) = &result {
        warn!(error = %err, kind = err.kind(), "quote request failed");
    }
    response::encode(result)
}

/// Serve on an already bound listener until ctrl-c.
pub async fn serve(listener: TcpListener, quoter: Arc<Quoter>) -> std::io::Result<()> {
    let app = create_api_router(quoter);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "ctrl_c listener error");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, exiting");
}
