//! Token handling for owner resolution.

pub mod jwt;
