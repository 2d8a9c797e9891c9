//! # maise-voices - KittenTTS voice embedding extractor
//!
//! Converts the `voices.npz` archive shipped with KittenTTS model releases
//! into the raw binary voice files bundled in the maise app's
//! `assets/voices/` directory.
//!
//! The archive maps internal keys (`expr-voice-2-f`, …) to style embedding
//! arrays. This crate resolves the app's friendly voice names against those
//! keys, normalizes each array to little-endian f32, and writes one
//! `kitten-<name>.bin` per voice found. Voices missing from the archive are
//! skipped rather than treated as errors; partial releases are expected.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! let report = maise_voices::extract(
//!     Path::new("voices.npz"),
//!     Path::new("app/src/main/assets/voices"),
//! ).unwrap();
//! println!("wrote {} voices, skipped {}", report.written.len(), report.skipped.len());
//! ```
//!
//! The output files carry no header or shape metadata; the consuming app
//! knows the expected dimensions (`[N, 256]` for the mini models) from its
//! model configuration.

pub mod archive;
pub mod extract;
pub mod voices;

pub use archive::{VoiceArchive, VoiceEmbedding};
pub use extract::{extract, ExtractReport, SkippedVoice, WrittenVoice};
pub use voices::{voice_file_name, VoiceAlias, VOICE_ALIASES};
