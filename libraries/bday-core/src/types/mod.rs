/// Domain types for the birthday reminder service
mod ids;
mod record;

pub use ids::RecordId;
pub use record::BirthdayRecord;
