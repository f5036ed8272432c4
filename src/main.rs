mod line;
mod render;
mod report;
mod table;

use clap::Parser;
use render::Markup;
use tracing_subscriber::EnvFilter;

/// Summarize benchmark precision/recall lines from stdin as an HTML table,
/// one row per (classname, dataset), sorted by classname.
#[derive(Parser, Debug)]
#[command(name = "results-table", version, about)]
pub struct Cli {
    /// Table layout. `legacy` keeps data rows inside <thead>; `corrected`
    /// moves them into <tbody>
    #[arg(long, value_enum, default_value_t = Markup::Legacy)]
    markup: Markup,

    /// Extra logging (new records, overwritten metrics)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    tracing::debug!(?cli, "parsed CLI arguments");

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();

    if let Err(e) = report::run(stdin, stdout, cli.markup) {
        tracing::error!(error = %e, "failed to generate results table");
        std::process::exit(1);
    }
}

/// Log to stderr; stdout carries the table.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .init();
}
