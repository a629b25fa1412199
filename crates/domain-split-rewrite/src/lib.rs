#![doc = include_str!("../README.md")]

pub mod error;
mod rewriter;
mod routing;
mod walker;

pub use error::RewriteError;
pub use rewriter::{CallCounts, CallRewriter, Rewrite};
pub use routing::{DomainRouter, Route, SkipReason};
pub use walker::{SourceFile, discover_sources};
