//! Rewrite command: injects the routed domain into the gettext calls of every
//! source file.

use crate::commands::{DryRunDiff, Project, ProjectArgs, WriteArgs};
use crate::core::CliError;
use crate::utils::ui;
use anyhow::{Context as _, Result};
use clap::Parser;
use domain_split_rewrite::{CallRewriter, DomainRouter, Route, SourceFile, discover_sources};
use fs_err as fs;

/// Arguments for the rewrite command.
#[derive(Debug, Parser)]
pub struct RewriteArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    #[command(flatten)]
    pub write: WriteArgs,
}

/// Run the rewrite command.
pub fn run_rewrite(args: RewriteArgs) -> Result<(), CliError> {
    let project = Project::load(args.project)?;
    let source_dir = project.source_dir()?;
    let config = &project.config;

    let router = DomainRouter::from_config(config)?;
    let rewriter = CallRewriter::new(&config.gettext_backend)?;
    let sources = discover_sources(&source_dir, &config.source_extensions, &config.excluded_dirs)?;

    let mut modified = Vec::new();
    let mut diffs = Vec::new();

    let pb = ui::create_progress_bar(sources.len() as u64, "Rewriting sources...");
    for source in &sources {
        pb.set_message(source.relative.clone());
        match router.route(&source.relative) {
            Route::Skip(reason) => {
                tracing::debug!("Skipping {} ({:?})", source.relative, reason);
            },
            Route::Rewrite(domain) => {
                if let Some(diff) = rewrite_file(source, &rewriter, domain, args.write.dry_run)? {
                    modified.push(source.relative.clone());
                    if args.write.diff {
                        diffs.push(diff);
                    }
                }
            },
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    modified.sort();
    ui::print_rewrite_summary(args.write.dry_run, sources.len(), &modified);
    for diff in &diffs {
        diff.print();
    }

    Ok(())
}

/// Rewrites one file, returning its diff when the content changed.
fn rewrite_file(
    source: &SourceFile,
    rewriter: &CallRewriter,
    domain: &str,
    dry_run: bool,
) -> Result<Option<DryRunDiff>> {
    let content = fs::read_to_string(&source.path)?;

    let result = rewriter.rewrite(&content, Some(domain));
    if !result.is_changed() {
        return Ok(None);
    }
    tracing::debug!(
        "{}: {} call(s) routed to '{}' {:?}",
        source.relative,
        result.counts.total(),
        domain,
        result.counts
    );

    let rewritten = result.content.into_owned();
    if !dry_run {
        fs::write(&source.path, &rewritten)
            .with_context(|| format!("Failed to rewrite {}", source.relative))?;
    }

    Ok(Some(DryRunDiff::new(&source.relative, content, rewritten)))
}
