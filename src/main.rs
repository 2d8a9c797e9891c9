//! Command-line interface for the voice extractor.
//!
//! Reads a KittenTTS `voices.npz` archive and writes one raw little-endian
//! float32 file per built-in voice into the app's assets directory.

use anyhow::Result;
use clap::Parser;
use maise_voices::extract::extract;
use std::path::{Path, PathBuf};

/// Default output location inside the application repository.
const DEFAULT_OUT_DIR: &str = "app/src/main/assets/voices";

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "maise-voices")]
#[command(about = "Extract KittenTTS voice embeddings into raw float32 app assets")]
struct Cli {
    /// Path to the voices.npz archive.
    #[arg(long)]
    npz: PathBuf,
    /// Output directory (default: app/src/main/assets/voices).
    #[arg(long)]
    out: Option<PathBuf>,
}

/// Entry point for the CLI.
fn main() -> Result<()> {
    let cli = Cli::parse();
    let out_dir = cli.out.unwrap_or_else(resolve_default_out_dir);
    extract(&cli.npz, &out_dir)?;
    Ok(())
}

/// Resolve the default assets directory, falling back to the parent directory
/// when run from a subdirectory of the app repository.
fn resolve_default_out_dir() -> PathBuf {
    if Path::new("app").exists() {
        return PathBuf::from(DEFAULT_OUT_DIR);
    }
    if Path::new("../app").exists() {
        return PathBuf::from("..").join(DEFAULT_OUT_DIR);
    }
    PathBuf::from(DEFAULT_OUT_DIR)
}
