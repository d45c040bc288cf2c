//! Type-safe identifier for stored PDU records.
//!
//! The storage layer owns key assignment: SQLite hands out a strictly
//! increasing `INTEGER PRIMARY KEY AUTOINCREMENT` value on insert, so there
//! is no `new()` constructor here.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Surrogate key of a persisted PDU record.
///
/// Serializes as a bare JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PduId(#[ts(type = "number")] pub i64);

impl PduId {
    /// Return the inner row id.
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for PduId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PduId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
