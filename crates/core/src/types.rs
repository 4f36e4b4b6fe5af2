/// Note primary keys are UUIDs assigned by the database.
pub type NoteId = uuid::Uuid;

/// Owner identifiers are opaque UUIDs resolved by the auth layer.
pub type OwnerId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
