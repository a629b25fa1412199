use crate::commands::{Project, ProjectArgs};
use crate::core::{CliError, VerificationReport};
use crate::utils::{catalog_name, discover_catalogs, ui};
use clap::Parser;
use domain_split_po::{Catalog, Coverage, read_catalog};

/// Arguments for the verify command.
#[derive(Debug, Parser)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

/// Run the verify command.
///
/// The full report is printed before a failure is returned.
pub fn run_verify(args: VerifyArgs) -> Result<(), CliError> {
    let project = Project::load(args.project)?;
    let locale_dir = project.locale_dir()?;
    let backup_path = project.backup_path(&locale_dir)?;

    ui::print_reading_backup(&backup_path);
    let backup = read_catalog(&backup_path)?;
    ui::print_backup_entries(backup.len());

    let catalogs = discover_catalogs(&locale_dir, &project.config.backup_file)?
        .iter()
        .map(|path| -> Result<(String, Catalog), CliError> {
            Ok((catalog_name(path), read_catalog(path)?))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let coverage = Coverage::compute(
        &backup,
        catalogs
            .iter()
            .map(|(name, catalog)| (name.as_str(), catalog)),
    );
    ui::print_coverage(&coverage);

    if coverage.is_complete() {
        ui::print_verification_passed();
        Ok(())
    } else {
        ui::print_verification_failed();
        Err(VerificationReport {
            missing_count: coverage.missing.len(),
            lost_count: coverage.lost.len(),
        }
        .into())
    }
}
