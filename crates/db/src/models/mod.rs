//! Domain model structs.
//!
//! Each entity struct is `FromRow` + `Serialize`, matching the database row
//! and the wire payload (camelCase field names).

pub mod note;
