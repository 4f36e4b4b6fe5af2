//! HTTP handlers.

pub mod notes;
