//! HTTP interface of the receipt processor.
//!
//! ## Endpoints
//!
//! - POST /receipts/process - Store a receipt, returns its id
//! - GET /receipts/:id/points - Points earned by a stored receipt
//! - GET /debug/receipts/:id/breakdown - Per-rule points (debug mode only)

pub mod dto;
pub mod error;
pub mod handlers;
pub mod server;

use crate::application::processor::ReceiptProcessor;
use axum::body::Body;
use axum::http::Request;
use axum::{Router, extract::DefaultBodyLimit, routing::get, routing::post};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, info_span};

/// Request body size limit (1 MiB).
pub const MAX_REQUEST_BODY: usize = 1024 * 1024;

/// Options controlling which routes the router exposes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouterOptions {
    /// Exposes the `/debug` routes.
    pub debug: bool,
}

/// Creates the HTTP router serving the receipts API.
pub fn create_router(processor: Arc<ReceiptProcessor>, options: RouterOptions) -> Router {
    let mut router = Router::new()
        .route("/receipts/process", post(handlers::process_receipt))
        .route("/receipts/:id/points", get(handlers::get_points));

    if options.debug {
        router = router.route(
            "/debug/receipts/:id/breakdown",
            get(handlers::get_breakdown),
        );
    }

    router
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY))
        .layer(CatchPanicLayer::custom(handlers::handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(processor)
}
