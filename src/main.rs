use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use leafpath::lowest_value_leaf_path;

#[derive(Parser, Debug)]
#[command(
    name = "leafpath",
    about = "Locate the lowest-valued leaf of a level-order binary tree"
)]
struct Cli {
    /// Level-order values given inline, e.g. `leafpath 5 7 8 10 11 12 13`
    #[arg(allow_negative_numbers = true, conflicts_with = "input")]
    values: Vec<i64>,

    /// Read whitespace- or comma-separated values from a file instead
    #[arg(long)]
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    // An empty file is a valid empty sequence; giving no source at all is not.
    let values = match cli.input {
        Some(path) => read_value_file(&path)
            .with_context(|| format!("failed to read values from {}", path.display()))?,
        None if cli.values.is_empty() => {
            bail!("no input values provided; pass values inline or via --input <file>")
        }
        None => cli.values,
    };

    println!("{}", lowest_value_leaf_path(&values));

    Ok(())
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_value_file(path: &PathBuf) -> Result<Vec<i64>> {
    let contents = fs::read_to_string(path)?;
    let mut values = Vec::new();

    for token in contents.split(|ch: char| ch.is_whitespace() || ch == ',') {
        if token.is_empty() {
            continue;
        }
        let value = token
            .parse::<i64>()
            .with_context(|| format!("invalid integer '{}'", token))?;
        values.push(value);
    }

    Ok(values)
}
