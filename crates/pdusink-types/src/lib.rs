//! Shared type definitions for the PDU sink.
//!
//! This crate is the single source of truth for the record shape persisted
//! by `pdusink-db` and the JSON bodies exchanged on `POST /submit-pdu`.
//! Wire types flow downstream to `TypeScript` via `ts-rs` so producers can
//! build requests against the same definitions.
//!
//! # Modules
//!
//! - [`ids`] -- Strongly-typed record identifier
//! - [`record`] -- The persisted PDU record
//! - [`wire`] -- Request and response bodies for the ingestion endpoint

pub mod ids;
pub mod record;
pub mod wire;

// Re-export all public types at crate root for convenience.
pub use ids::PduId;
pub use record::PduRecord;
pub use wire::{ErrorResponse, ResponseStatus, SubmitPduRequest, SubmitPduResponse};
