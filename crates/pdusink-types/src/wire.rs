//! Request and response bodies for `POST /submit-pdu`.
//!
//! Every response carries a `status` discriminator. Success bodies add the
//! assigned `id`; error bodies add a human-readable `message` and nothing
//! else, so callers cannot tell storage sub-causes apart.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::PduId;

/// Body of a PDU submission.
///
/// `raw_pdu` is required and must be a JSON string. Unknown fields are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SubmitPduRequest {
    /// The payload to persist, uninterpreted.
    pub raw_pdu: String,
}

/// Outcome discriminator shared by all response bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ResponseStatus {
    /// The PDU was persisted.
    Success,
    /// The request was rejected.
    Error,
}

/// Body returned with `201 Created`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SubmitPduResponse {
    /// Always [`ResponseStatus::Success`].
    pub status: ResponseStatus,
    /// Key assigned to the new record.
    pub id: PduId,
}

impl SubmitPduResponse {
    /// Acknowledge a persisted record.
    pub const fn success(id: PduId) -> Self {
        Self {
            status: ResponseStatus::Success,
            id,
        }
    }
}

/// Body returned with every 4xx/5xx outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ErrorResponse {
    /// Always [`ResponseStatus::Error`].
    pub status: ResponseStatus,
    /// Fixed, caller-facing description of the failure.
    pub message: String,
}

impl ErrorResponse {
    /// Build an error body with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
        }
    }
}
