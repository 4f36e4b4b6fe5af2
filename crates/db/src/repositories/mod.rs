//! Repository layer.
//!
//! Repositories are zero-sized structs providing async read methods that
//! accept `&PgPool` as the first argument.

pub mod note_repo;

pub use note_repo::NoteRepo;
