use clap::{ArgAction, Parser, Subcommand};
use domain_split_cli::commands::{
    BackfillArgs, RewriteArgs, VerifyArgs, run_backfill, run_rewrite, run_verify,
};
use domain_split_cli::utils::ui;
use miette::Result as MietteResult;

#[derive(Parser)]
#[command(name = "domain-split")]
#[command(about = "Split a gettext default domain into per-feature domains")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Deterministic output: no colors, no progress bars.
    #[arg(long, global = true, hide = true)]
    e2e: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Inject feature domains into the gettext calls of the source tree
    Rewrite(RewriteArgs),

    /// Fill empty translations of the split catalogs from the backup
    Backfill(BackfillArgs),

    /// Check that no backup translation was lost by the split
    Verify(VerifyArgs),
}

fn main() -> MietteResult<()> {
    let cli = Cli::parse();

    ui::set_e2e_mode(cli.e2e);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(!ui::is_e2e())
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .color(!ui::is_e2e())
                .build(),
        )
    }))
    .ok();

    ui::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Rewrite(args) => run_rewrite(args),
        Commands::Backfill(args) => run_backfill(args),
        Commands::Verify(args) => run_verify(args),
    };

    result.map_err(miette::Report::new)
}
