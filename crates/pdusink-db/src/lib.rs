//! Data layer for the PDU sink (`SQLite`).
//!
//! A single local `SQLite` database holds every accepted PDU. The pool is
//! opened once at startup, the schema is ensured through an embedded
//! migration, and the resulting handle is shared by all request handlers.
//!
//! # Architecture
//!
//! ```text
//! startup
//!     |
//!     +-- SqlitePool::initialize --> open-or-create pdus.db
//!     |                          +-> run embedded migrations
//!     |
//! request
//!     +-- PduStore::insert -------> INSERT ... RETURNING (one row, atomic)
//! ```
//!
//! # Modules
//!
//! - [`sqlite`] -- Connection pool, configuration and schema setup
//! - [`pdu_store`] -- Append-only insert and direct reads on the `pdus` table
//! - [`error`] -- Shared error types

pub mod error;
pub mod pdu_store;
pub mod sqlite;

// Re-export primary types for convenience.
pub use error::DbError;
pub use pdu_store::{PduRow, PduStore};
pub use sqlite::{SqliteConfig, SqlitePool};
