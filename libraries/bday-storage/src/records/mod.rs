//! Birthday records vertical slice
//!
//! Owns every query against the `birthdays` table. Records are immutable
//! once created; there is deliberately no update operation.

use crate::error::{Result, StorageError};
use bday_core::types::{BirthdayRecord, RecordId};
use sqlx::{Row, SqlitePool};

/// Insert a new record and return it with its generated ID
pub async fn create(
    pool: &SqlitePool,
    name: &str,
    date_of_birth: &str,
    email: &str,
) -> Result<BirthdayRecord> {
    let record = BirthdayRecord::new(name, date_of_birth, email);

    sqlx::query(
        "INSERT INTO birthdays (id, name, date_of_birth, email, created_at)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&record.id)
    .bind(&record.name)
    .bind(&record.date_of_birth)
    .bind(&record.email)
    .bind(record.created_at.timestamp())
    .execute(pool)
    .await?;

    Ok(record)
}

/// Get all records, in no particular order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<BirthdayRecord>> {
    let rows = sqlx::query("SELECT id, name, date_of_birth, email, created_at FROM birthdays")
        .fetch_all(pool)
        .await?;

    rows.iter().map(from_row).collect()
}

/// Get a record by ID
pub async fn get_by_id(pool: &SqlitePool, id: &RecordId) -> Result<Option<BirthdayRecord>> {
    let row = sqlx::query(
        "SELECT id, name, date_of_birth, email, created_at FROM birthdays WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(from_row).transpose()
}

/// Delete a record by ID, returning whether a row was removed
///
/// An absent ID is a silent no-op: the caller does not distinguish
/// "deleted" from "nothing matched".
pub async fn delete_by_id(pool: &SqlitePool, id: &RecordId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM birthdays WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<BirthdayRecord> {
    Ok(BirthdayRecord::with_id(
        row.get::<RecordId, _>("id"),
        row.get::<String, _>("name"),
        row.get::<String, _>("date_of_birth"),
        row.get::<String, _>("email"),
        chrono::DateTime::from_timestamp(row.get::<i64, _>("created_at"), 0)
            .ok_or_else(|| StorageError::Query("Invalid timestamp".to_string()))?,
    ))
}
