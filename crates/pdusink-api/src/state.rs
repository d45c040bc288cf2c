//! Shared application state for the ingestion API.
//!
//! [`AppState`] is built once at startup from the already-initialized store
//! handle and the configured secret, then shared read-only by every request.

use pdusink_db::SqlitePool;

use crate::auth::ApiToken;

/// Default cap on the request body read by the handler (2 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 2_097_152;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor. Holds no per-request or cross-request mutable data.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Store handle opened by the storage initializer.
    pub store: SqlitePool,
    /// The single shared bearer secret.
    pub api_token: ApiToken,
    /// Maximum number of body bytes read before decoding.
    pub max_body_bytes: usize,
}

impl AppState {
    /// Create the application state with the default body limit.
    pub const fn new(store: SqlitePool, api_token: ApiToken) -> Self {
        Self {
            store,
            api_token,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    /// Override the body limit.
    #[must_use]
    pub const fn with_max_body_bytes(mut self, max: usize) -> Self {
        self.max_body_bytes = max;
        self
    }
}
