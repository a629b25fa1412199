#![doc = include_str!("../README.md")]

mod block;
mod catalog;
pub mod coverage;
pub mod error;
mod escape;
mod fill;

pub use catalog::{Catalog, Entry, EntryValue, Key, parse, parse_entries, read_catalog};
pub use coverage::{Coverage, FileStats};
pub use error::PoError;
pub use escape::{escape, unescape};
pub use fill::{FillOutcome, fill};
