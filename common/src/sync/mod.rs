//! Synchronization of edited suppliers with the remote API.

pub mod api;
pub mod engine;
pub mod reconcile;

pub use api::SupplierApi;
pub use engine::save;
