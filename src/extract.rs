//! The extraction pipeline: archive in, raw float32 voice files out.
//!
//! [`extract`] is the whole tool: it ensures the output directory exists,
//! opens the archive, walks the built-in voice table, and writes one
//! `kitten-<name>.bin` per voice whose key is present. Absent keys are
//! skipped and reported; they are expected for partial or alternate releases.

use crate::archive::VoiceArchive;
use crate::voices::{voice_file_name, VOICE_ALIASES};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// One voice file written by a run.
#[derive(Debug, Clone)]
pub struct WrittenVoice {
    /// Friendly voice name.
    pub name: &'static str,
    /// Archive key the embedding came from.
    pub key: &'static str,
    /// Path of the written file.
    pub path: PathBuf,
    /// Shape of the source array.
    pub shape: Vec<u64>,
    /// File size in bytes.
    pub bytes: u64,
}

/// One voice skipped because its key is absent from the archive.
#[derive(Debug, Clone)]
pub struct SkippedVoice {
    /// Friendly voice name.
    pub name: &'static str,
    /// Archive key that was not found.
    pub key: &'static str,
}

/// Outcome of an extraction run.
#[derive(Debug, Default)]
pub struct ExtractReport {
    /// Voices written, in table order.
    pub written: Vec<WrittenVoice>,
    /// Voices skipped, in table order.
    pub skipped: Vec<SkippedVoice>,
}

/// Extract every built-in voice present in `npz_path` into `out_dir`.
///
/// The output directory is created if absent (parents included). Each output
/// file holds the embedding values as consecutive little-endian f32 bytes in
/// row-major order, fully serialized in memory before the file is created.
/// Progress is reported line-per-voice on stdout.
///
/// # Errors
///
/// Returns an error only for the two fatal cases: the archive cannot be
/// opened or the output directory cannot be created (plus I/O failures while
/// reading or writing a present entry). Absent keys are not errors.
pub fn extract(npz_path: &Path, out_dir: &Path) -> Result<ExtractReport> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let mut archive = VoiceArchive::open(npz_path)?;
    let available = archive.keys();
    println!("Archive keys found: {available:?}\n");

    let mut report = ExtractReport::default();
    for alias in VOICE_ALIASES {
        if !archive.contains(alias.key) {
            println!(
                "[SKIP] '{}' not found in archive for voice '{}'",
                alias.key, alias.name
            );
            report.skipped.push(SkippedVoice {
                name: alias.name,
                key: alias.key,
            });
            continue;
        }

        let embedding = archive.read_f32(alias.key)?;
        let bytes = embedding.to_le_bytes();
        let file_name = voice_file_name(alias.name);
        let path = out_dir.join(&file_name);
        fs::write(&path, &bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        let size_kb = bytes.len() as f64 / 1024.0;
        println!(
            "[OK]   {} -> {}  shape={:?}  {size_kb:.1} KB",
            alias.key, file_name, embedding.shape
        );
        report.written.push(WrittenVoice {
            name: alias.name,
            key: alias.key,
            path,
            shape: embedding.shape,
            bytes: bytes.len() as u64,
        });
    }

    println!(
        "\nDone. Wrote {} voice file(s) to {} ({} skipped).",
        report.written.len(),
        out_dir.display(),
        report.skipped.len()
    );
    Ok(report)
}
