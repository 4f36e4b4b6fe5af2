//! Domain logic for the carnet note-browsing service.
//!
//! Everything in this crate is pure: pagination math, search pattern
//! construction, search-row validation, and the client-side selection
//! projection. No I/O, no internal dependencies, so both the API layer and
//! any future CLI tooling can use it.

pub mod error;
pub mod pagination;
pub mod search;
pub mod selection;
pub mod types;
pub mod validate;
