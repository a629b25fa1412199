// CLI output with consistent styling using indicatif and colored.
// Reports go to stdout with println!; logs go to stderr through tracing.

use colored::Colorize as _;
use domain_split_po::{Coverage, FileStats, Key};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const PD_TICK: Duration = Duration::from_millis(100);

/// Longest listing of missing or lost entries in the verify report.
const MAX_LISTED: usize = 20;

static E2E_MODE: AtomicBool = AtomicBool::new(false);

/// Enable E2E mode for deterministic output (no colors, hidden progress bars).
pub fn set_e2e_mode(enabled: bool) {
    E2E_MODE.store(enabled, Ordering::SeqCst);
    if enabled {
        colored::control::set_override(false);
    }
}

pub fn is_e2e() -> bool {
    E2E_MODE.load(Ordering::SeqCst)
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `verbosity`.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!is_e2e())
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

pub fn create_progress_bar(len: u64, msg: &str) -> ProgressBar {
    if is_e2e() {
        return ProgressBar::hidden();
    }
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} {msg} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    let pb = ProgressBar::new(len);
    pb.set_style(style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(PD_TICK);
    pb
}

fn mode(dry_run: bool) -> String {
    if dry_run {
        "[DRY RUN] ".yellow().to_string()
    } else {
        String::new()
    }
}

// rewrite

pub fn print_rewrite_summary(dry_run: bool, scanned: usize, modified: &[String]) {
    let mode = mode(dry_run);
    println!("{}Scanned {} files", mode, scanned);
    println!("{}Modified {} files:", mode, modified.len());
    for path in modified {
        println!("  {} {}", "✓".green(), path);
    }
    if modified.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
}

// backfill

pub fn print_reading_backup(path: &Path) {
    println!("{} {}", "Reading backup:".dimmed(), path.display());
}

pub fn print_loaded_translations(count: usize) {
    println!("  Loaded {} translations from backup", count.to_string().cyan());
    println!();
}

pub fn print_filled(dry_run: bool, name: &str, filled: usize, total: usize) {
    let status = format!("{}/{} filled", filled, total);
    let status = if filled > 0 {
        status.green()
    } else {
        status.normal()
    };
    println!("  {}{}: {}", mode(dry_run), name, status);
}

pub fn print_backfill_summary(dry_run: bool, filled: usize, total: usize) {
    println!();
    println!(
        "{}Total: {}/{} entries filled across all files",
        mode(dry_run),
        filled,
        total
    );
}

pub fn print_diff_header(path: &str) {
    println!();
    println!("{} {}", "---".dimmed(), path.bold());
}

pub fn print_diff(old: &str, new: &str) {
    use similar::{ChangeTag, TextDiff};

    let diff = TextDiff::from_lines(old, new);

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            println!("{}", "  ...".dimmed());
        }
        for op in group {
            for change in diff.iter_changes(op) {
                let line = match change.tag() {
                    ChangeTag::Delete => format!("- {}", change).red(),
                    ChangeTag::Insert => format!("+ {}", change).green(),
                    ChangeTag::Equal => format!("  {}", change).dimmed(),
                };
                print!("{}", line);
                if change.missing_newline() {
                    println!();
                }
            }
        }
    }
}

// verify

pub fn print_backup_entries(count: usize) {
    println!("  {} entries in backup", count.to_string().cyan());
    println!();
}

pub fn print_coverage(coverage: &Coverage) {
    println!("Per-file stats:");
    for stats in &coverage.files {
        print_file_stats(stats);
    }
    println!();

    if coverage.missing.is_empty() {
        println!(
            "{} All backup msgids are present in at least one domain file",
            "✓".green()
        );
    } else {
        println!(
            "{}",
            format!(
                "! {} msgids from backup not found in any PO file:",
                coverage.missing.len()
            )
            .yellow()
        );
        print_capped(&coverage.missing, |key: &Key| key.to_string());
    }

    println!();
    if coverage.lost.is_empty() {
        println!(
            "{} All backup translations are present in at least one domain file",
            "✓".green()
        );
    } else {
        println!(
            "{}",
            format!(
                "! {} translations not filled in any domain:",
                coverage.lost.len()
            )
            .yellow()
        );
        print_capped(&coverage.lost, |(key, value): &(Key, String)| {
            format!("{}: {:?}", key, value)
        });
    }

    println!();
    println!(
        "Backup had {} translated entries",
        coverage.backup_translated
    );
    println!(
        "Total translated across all new files: {}",
        coverage.current_translated()
    );
}

fn print_file_stats(stats: &FileStats) {
    println!(
        "  {}: {}/{} translated ({:.0}%)",
        stats.name,
        stats.translated,
        stats.total,
        stats.percent()
    );
}

fn print_capped<T>(items: &[T], describe: impl Fn(&T) -> String) {
    for item in items.iter().take(MAX_LISTED) {
        println!("  - {}", describe(item));
    }
    if items.len() > MAX_LISTED {
        println!("  ... and {} more", items.len() - MAX_LISTED);
    }
}

pub fn print_verification_passed() {
    println!();
    println!("{}", "✓ Verification PASSED: no translations lost".green());
}

pub fn print_verification_failed() {
    println!();
    println!("{}", "✗ Verification FAILED: some translations were lost".red());
}
