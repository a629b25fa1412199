//! CLI command implementations.

mod backfill;
mod common;
mod dry_run;
mod rewrite;
mod verify;

pub use backfill::{BackfillArgs, run_backfill};
pub use common::{Project, ProjectArgs, WriteArgs};
pub use dry_run::DryRunDiff;
pub use rewrite::{RewriteArgs, run_rewrite};
pub use verify::{VerifyArgs, run_verify};
