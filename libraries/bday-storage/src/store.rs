use crate::error::Result;
use crate::records;
use bday_core::types::{BirthdayRecord, RecordId};
use sqlx::SqlitePool;

/// Explicitly owned handle over the birthday records table
///
/// Passed by reference into the HTTP API and the daily scanner so tests can
/// substitute a store backed by a throwaway database.
#[derive(Clone)]
pub struct RecordStore {
    pool: SqlitePool,
}

impl RecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Persist a new record, returning it with its assigned ID
    pub async fn create(
        &self,
        name: &str,
        date_of_birth: &str,
        email: &str,
    ) -> Result<BirthdayRecord> {
        records::create(&self.pool, name, date_of_birth, email).await
    }

    /// Every stored record, order unspecified
    pub async fn get_all(&self) -> Result<Vec<BirthdayRecord>> {
        records::get_all(&self.pool).await
    }

    /// Look up a single record
    pub async fn get_by_id(&self, id: &RecordId) -> Result<Option<BirthdayRecord>> {
        records::get_by_id(&self.pool, id).await
    }

    /// Remove a record if present, returning whether anything was deleted
    pub async fn delete_by_id(&self, id: &RecordId) -> Result<bool> {
        records::delete_by_id(&self.pool, id).await
    }
}
