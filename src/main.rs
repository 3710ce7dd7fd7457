use std::io;

use anyhow::Result;
use clap::Parser;
use paged_row_store::table::Table;
use paged_row_store::{repl, TABLE_MAX_PAGES};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter;
use tracing_subscriber::prelude::*;

/// An in-memory, append-only table of (id, username, email) rows.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maximum number of pages the table may allocate.
    #[arg(long, default_value_t = TABLE_MAX_PAGES)]
    max_pages: usize,

    /// Log more; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(io::stderr);
    let filter_layer = filter::EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let table = Table::with_max_pages(args.max_pages);
    repl::run(table, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
