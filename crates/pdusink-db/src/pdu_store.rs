//! Record store operations on the `pdus` table.
//!
//! The table is append-only from this crate's perspective: there is an
//! insert and there are reads, but no update or delete. Ids and
//! `created_at` are assigned by `SQLite` inside the insert statement itself,
//! so a record is either fully written or not written at all.

use chrono::{DateTime, Utc};
use pdusink_types::{PduId, PduRecord};

use crate::error::DbError;
use crate::sqlite::SqlitePool;

/// Operations on the `pdus` table.
pub struct PduStore<'a> {
    pool: &'a sqlx::SqlitePool,
}

impl<'a> PduStore<'a> {
    /// Create a new store bound to a connection pool.
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool: pool.pool() }
    }

    /// Persist one PDU as a single atomic insert.
    ///
    /// The payload is bound as-is: no trimming, normalization or size
    /// check happens here.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the insert fails (pool closed,
    /// database locked past the busy timeout, disk full, ...).
    pub async fn insert(&self, raw_pdu: &str) -> Result<PduRecord, DbError> {
        let row = sqlx::query_as::<_, PduRow>(
            r"INSERT INTO pdus (raw_pdu) VALUES (?1)
              RETURNING id, raw_pdu, created_at",
        )
        .bind(raw_pdu)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(pdu_id = row.id, "Inserted PDU");
        Ok(row.into())
    }

    /// Fetch a single record by id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the query fails.
    pub async fn get(&self, id: PduId) -> Result<Option<PduRecord>, DbError> {
        let row = sqlx::query_as::<_, PduRow>(
            r"SELECT id, raw_pdu, created_at
              FROM pdus
              WHERE id = ?1",
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(PduRecord::from))
    }

    /// Fetch every record in id order.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the query fails.
    pub async fn list(&self) -> Result<Vec<PduRecord>, DbError> {
        let rows = sqlx::query_as::<_, PduRow>(
            r"SELECT id, raw_pdu, created_at
              FROM pdus
              ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(PduRecord::from).collect())
    }

    /// Number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the query fails.
    pub async fn count(&self) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM pdus")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}

/// A row from the `pdus` table.
///
/// Uses runtime types rather than compile-time checked types to
/// avoid requiring a live database during builds.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PduRow {
    /// Auto-incremented record ID.
    pub id: i64,
    /// The stored payload.
    pub raw_pdu: String,
    /// Insert timestamp (RFC 3339 text in the database).
    pub created_at: DateTime<Utc>,
}

impl From<PduRow> for PduRecord {
    fn from(row: PduRow) -> Self {
        Self {
            id: PduId(row.id),
            raw_pdu: row.raw_pdu,
            created_at: row.created_at,
        }
    }
}
