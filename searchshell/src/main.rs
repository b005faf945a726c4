use anyhow::Result;
use clap::Parser;
use searchshell::{crawl_file_tree, process_queries, ShellOptions};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "searchshell")]
#[command(about = "Index a directory tree in memory and answer queries from stdin", long_about = None)]
struct Args {
    /// Absolute or relative path to the directory tree to index
    docroot: PathBuf,
    /// Print one JSON object per query instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    tracing::info!(docroot = %args.docroot.display(), "indexing");
    let (docs, index) = crawl_file_tree(&args.docroot)?;

    let options = ShellOptions { json: args.json };
    process_queries(&docs, &index, io::stdin().lock(), io::stdout().lock(), &options)?;
    Ok(())
}
