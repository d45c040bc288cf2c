//! Error types for the server binary.
//!
//! [`StartupError`] is the top-level error that `main` reports before
//! exiting non-zero. Every variant is fatal: the process never serves
//! requests without a valid configuration and an initialized store.

use pdusink_api::ServerError;
use pdusink_db::DbError;

/// Top-level error for the server binary.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// Configuration is invalid or missing.
    #[error("config error: {0}")]
    Config(String),

    /// The store could not be opened or its schema ensured.
    #[error("store initialization failed: {source}")]
    Store {
        /// The underlying data layer error.
        #[from]
        source: DbError,
    },

    /// The HTTP listener failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: ServerError,
    },
}
