pub mod navbar;
pub mod suppliers;
