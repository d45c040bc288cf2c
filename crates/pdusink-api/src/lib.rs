//! Ingestion API server for the PDU sink.
//!
//! This crate provides an Axum HTTP server exposing exactly one endpoint:
//!
//! - **`POST /submit-pdu`** -- authenticate the caller against the shared
//!   bearer secret, decode `{ "raw_pdu": "<string>" }`, persist one record,
//!   and acknowledge with the assigned id.
//!
//! # Architecture
//!
//! ```text
//! request --> auth (Authorization: Bearer) --> decode body --> PduStore::insert --> 201 { id }
//!               | 401                             | 400            | 500
//! ```
//!
//! Each step is terminal on failure and nothing is retried. The body is
//! not read until the caller has authenticated, so unauthenticated
//! requests never reach the store.
//!
//! The handler is stateless apart from the shared [`AppState`], which
//! carries the store handle opened at startup.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use auth::ApiToken;
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, shutdown_signal, start_server};
pub use state::{AppState, DEFAULT_MAX_BODY_BYTES};
