use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use num_bigint::BigInt;
use recover_core::ShareDocument;

/// recover — reconstruct secrets from base-encoded Shamir share documents.
///
/// Each input file is a JSON document with a `keys` record (point count n,
/// threshold k) and one share per remaining field. Every k-point subset is
/// interpolated at x = 0 over exact big integers and the most frequent
/// result wins, so a minority of corrupted shares is outvoted.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON share documents to process, one secret per file
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut failures = 0usize;
    for file in &cli.files {
        // One bad document must not stop the rest of the batch.
        match recover_file(file) {
            Ok(secret) => {
                println!("Secret for {}: {}", file.display(), secret);
            }
            Err(err) => {
                eprintln!("{}: {:#}", file.display(), err);
                failures += 1;
            }
        }
    }

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn recover_file(path: &Path) -> Result<BigInt> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let document: ShareDocument = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", path.display()))?;
    let secret = document
        .decode()
        .context("decoding share points")?
        .recover_secret()
        .context("reconstructing secret")?;
    Ok(secret)
}
