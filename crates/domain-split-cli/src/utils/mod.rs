//! Utility functions shared across CLI commands.

mod discovery;
pub mod ui;

pub use discovery::{catalog_name, discover_catalogs};
