//! Shared core of the supplier administration app: records, the aggregate
//! editor, and the synchronization engine that writes edits back to the
//! supplier API. Browser-independent so it can be tested natively.

pub mod catalog;
pub mod editor;
pub mod error;
pub mod model;
pub mod requests;
pub mod session;
pub mod sync;
