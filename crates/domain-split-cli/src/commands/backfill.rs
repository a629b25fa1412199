//! Backfill command: copies the translations of the pre-split backup into the
//! empty slots of the split catalogs.

use crate::commands::{DryRunDiff, Project, ProjectArgs, WriteArgs};
use crate::core::CliError;
use crate::utils::{catalog_name, discover_catalogs, ui};
use clap::Parser;
use domain_split_po::{fill, read_catalog};
use fs_err as fs;

/// Arguments for the backfill command.
#[derive(Debug, Parser)]
pub struct BackfillArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    #[command(flatten)]
    pub write: WriteArgs,
}

/// Run the backfill command.
pub fn run_backfill(args: BackfillArgs) -> Result<(), CliError> {
    let project = Project::load(args.project)?;
    let locale_dir = project.locale_dir()?;
    let backup_path = project.backup_path(&locale_dir)?;
    let dry_run = args.write.dry_run;

    ui::print_reading_backup(&backup_path);
    let backup = read_catalog(&backup_path)?;
    ui::print_loaded_translations(backup.len());

    let mut total_filled = 0;
    let mut total_entries = 0;

    for path in discover_catalogs(&locale_dir, &project.config.backup_file)? {
        let name = catalog_name(&path);
        let content = fs::read_to_string(&path)?;
        let outcome = fill(&content, &backup);

        for key in &outcome.filled_keys {
            tracing::debug!("{}: filled {}", name, key);
        }
        if outcome.changed && !dry_run {
            fs::write(&path, &outcome.content)?;
        }

        total_filled += outcome.filled;
        total_entries += outcome.total;
        ui::print_filled(dry_run, &name, outcome.filled, outcome.total);

        if args.write.diff && outcome.changed {
            DryRunDiff::new(name, content, outcome.content).print();
        }
    }

    ui::print_backfill_summary(dry_run, total_filled, total_entries);
    Ok(())
}
