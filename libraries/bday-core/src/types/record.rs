/// Birthday record domain type
use super::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored birthday entry
///
/// Records are immutable once created: they are only ever created or deleted.
/// The date of birth is kept as the string the client submitted; it is parsed
/// lazily when formatting or matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayRecord {
    /// Unique record identifier
    pub id: RecordId,

    /// Display name, used in email greetings
    pub name: String,

    /// Date of birth as submitted (usually `YYYY-MM-DD`)
    #[serde(rename = "dob")]
    pub date_of_birth: String,

    /// Destination email address
    pub email: String,

    /// Record creation timestamp
    pub created_at: DateTime<Utc>,
}

impl BirthdayRecord {
    /// Create a new record with a generated ID
    pub fn new(
        name: impl Into<String>,
        date_of_birth: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: RecordId::generate(),
            name: name.into(),
            date_of_birth: date_of_birth.into(),
            email: email.into(),
            created_at: Utc::now(),
        }
    }

    /// Rehydrate a record with a known ID and timestamp (for storage layers)
    pub fn with_id(
        id: RecordId,
        name: impl Into<String>,
        date_of_birth: impl Into<String>,
        email: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            date_of_birth: date_of_birth.into(),
            email: email.into(),
            created_at,
        }
    }
}
