//! Shared error type and numeric helpers

pub mod error;
pub mod numeric;

pub use error::LabError;
