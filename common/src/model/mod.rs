//! Records exchanged with the supplier API.

pub mod certificate;
pub mod group;
pub mod lenient;
pub mod person;
pub mod unit;

/// Numeric primary key assigned by the backend.
pub type RecordId = i64;
