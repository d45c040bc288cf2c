//! The persisted PDU record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::PduId;

/// A single stored protocol data unit.
///
/// Records are append-only: created once on a successful submission and
/// never updated or deleted by this system. `raw_pdu` is opaque text and is
/// stored exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PduRecord {
    /// Key assigned by the store.
    pub id: PduId,
    /// The submitted payload, uninterpreted.
    pub raw_pdu: String,
    /// Insert time assigned by the store.
    pub created_at: DateTime<Utc>,
}
