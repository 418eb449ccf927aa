//! Rewrites the action image paths of a guide document before it is bundled.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use burns_catalog::assets::{relink_file, ActionImageMap, RelinkStrategy};

#[derive(Debug, Parser)]
#[command(name = "burns-relink", version, about = "Relink do/don't images in a burn guide document")]
struct Cli {
    /// Path to the guide document (burns-data.json).
    document: PathBuf,

    /// How new image paths are chosen.
    #[arg(long, value_enum, default_value_t = Strategy::Category)]
    strategy: Strategy,

    /// Report what would change without writing the file.
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// ./images/<guide>/<dos|donts>/step-<n>.jpg
    Category,
    /// Shared illustrations matched on the action's English text.
    Action,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let map = ActionImageMap::default();
    let strategy = match cli.strategy {
        Strategy::Category => RelinkStrategy::Category,
        Strategy::Action => RelinkStrategy::Action(&map),
    };

    let report = relink_file(&cli.document, strategy, cli.dry_run)?;
    info!(
        changed = report.changed,
        guides = report.guides,
        written = report.written,
        "done"
    );
    Ok(())
}
