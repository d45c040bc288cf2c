//! Axum router construction for the ingestion API.

use std::sync::Arc;

use axum::Router;
use axum::routing::post;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes exactly one route:
/// - `POST /submit-pdu` -- PDU submission
///
/// Other methods on that path get `405`, other paths `404`. Every request
/// runs inside a `TraceLayer` span.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/submit-pdu", post(handlers::submit_pdu))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
