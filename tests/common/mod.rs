//! Shared helpers for building `.npz` fixture archives.
//!
//! An `.npz` file is a zip of `.npy` members, so fixtures are assembled from
//! in-memory `.npy` payloads and stored (uncompressed) zip entries. No binary
//! fixtures are checked in.

use npyz::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::write::FileOptions;

/// Serialize one array to `.npy` bytes using the element type's default
/// (little-endian) dtype.
pub fn npy_bytes<T: npyz::AutoSerialize + Copy>(shape: &[u64], values: &[T]) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut writer = npyz::WriteOptions::new()
        .default_dtype()
        .shape(shape)
        .writer(&mut buf)
        .begin_nd()
        .expect("begin npy payload");
    writer.extend(values.iter().copied()).expect("write npy values");
    writer.finish().expect("finish npy payload");
    buf
}

/// Serialize an f32 array to `.npy` bytes stored big-endian (`>f4`).
pub fn npy_f32_big_endian(shape: &[u64], values: &[f32]) -> Vec<u8> {
    let dtype = npyz::DType::Plain(">f4".parse().expect("parse big-endian dtype"));
    let mut buf = Vec::new();
    let mut writer = npyz::WriteOptions::new()
        .dtype(dtype)
        .shape(shape)
        .writer(&mut buf)
        .begin_nd()
        .expect("begin npy payload");
    writer.extend(values.iter().copied()).expect("write npy values");
    writer.finish().expect("finish npy payload");
    buf
}

/// Write an `.npz` archive with one entry per `(key, npy_payload)` pair.
pub fn write_npz(path: &Path, entries: &[(&str, Vec<u8>)]) {
    let file = File::create(path).expect("create npz file");
    let mut zip = zip::ZipWriter::new(file);
    for (name, payload) in entries {
        let options = FileOptions::default().compression_method(zip::CompressionMethod::Stored);
        zip.start_file(format!("{name}.npy"), options)
            .expect("start npz entry");
        zip.write_all(payload).expect("write npz entry");
    }
    zip.finish().expect("finish npz");
}

/// Concatenated little-endian encoding of `values`, the output file contract.
pub fn le_bytes(values: &[f32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(values.len() * 4);
    for value in values {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    bytes
}
