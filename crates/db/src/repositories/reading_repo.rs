//! Repository for the append-only `readings` table.

use gaswatch_core::reading::NewReading;
use gaswatch_core::types::DbId;

use crate::models::reading::Reading;
use crate::DbPool;

/// Column list for `readings` queries.
const COLUMNS: &str = "id, gas_level, gas_leak, recorded_at, created_at";

/// Provides append and lookup operations for readings. There is no update
/// or delete: readings are immutable once stored.
pub struct ReadingRepo;

impl ReadingRepo {
    /// Append a reading. The row is committed when this returns `Ok`.
    pub async fn create(pool: &DbPool, reading: &NewReading) -> Result<Reading, sqlx::Error> {
        let query = format!(
            "INSERT INTO readings (gas_level, gas_leak, recorded_at) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reading>(&query)
            .bind(reading.gas_level)
            .bind(reading.gas_leak)
            .bind(reading.recorded_at)
            .fetch_one(pool)
            .await
    }

    /// Get a single reading by ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Reading>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM readings WHERE id = $1");
        sqlx::query_as::<_, Reading>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Total number of stored readings.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM readings")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
