//! Read-only access to NumPy `.npz` voice archives.
//!
//! An `.npz` archive is a zip of `.npy` members, one per named array. The
//! extractor needs exactly two operations from it: enumerate entry names and
//! read one entry as a float32 array. Stored element types other than f32 are
//! cast on load; the numeric values are unchanged.

use anyhow::{bail, Context, Result};
use npyz::npz::NpzArchive;
use npyz::{DType, NpyFile};
use std::fs;
use std::io;
use std::path::Path;

/// A named-array archive opened for reading.
///
/// The underlying file handle lives as long as this value and is released on
/// drop on every exit path.
pub struct VoiceArchive {
    npz: NpzArchive<io::BufReader<fs::File>>,
}

impl std::fmt::Debug for VoiceArchive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoiceArchive").finish_non_exhaustive()
    }
}

/// One array read from the archive, normalized to f32.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceEmbedding {
    /// Array dimensions as stored in the archive.
    pub shape: Vec<u64>,
    /// Element values in row-major order.
    pub values: Vec<f32>,
}

impl VoiceEmbedding {
    /// Number of scalar elements.
    pub fn element_count(&self) -> usize {
        self.values.len()
    }

    /// Serialize the values as consecutive little-endian f32 bytes.
    ///
    /// No header, no length prefix; the consumer knows the expected shape.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.values.len() * 4);
        for value in &self.values {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        bytes
    }
}

impl VoiceArchive {
    /// Open an archive file for reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not a readable
    /// `.npz` archive.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let npz = NpzArchive::open(path)
            .with_context(|| format!("Failed to open voice archive {}", path.display()))?;
        Ok(Self { npz })
    }

    /// Names of every array in the archive, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.npz.array_names().map(str::to_string).collect();
        keys.sort();
        keys
    }

    /// Whether the archive contains an array named `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.npz.array_names().any(|name| name == key)
    }

    /// Read the array named `key`, coercing its element type to f32.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry is missing, its payload cannot be read,
    /// or its element type is not numeric.
    pub fn read_f32(&mut self, key: &str) -> Result<VoiceEmbedding> {
        let npy = self
            .npz
            .by_name(key)
            .with_context(|| format!("Failed to read archive entry '{key}'"))?
            .ok_or_else(|| anyhow::anyhow!("Archive entry '{key}' not found"))?;
        let shape = npy.shape().to_vec();
        let values = read_values_as_f32(npy)
            .with_context(|| format!("Failed to decode archive entry '{key}'"))?;
        Ok(VoiceEmbedding { shape, values })
    }
}

/// Decode one array's payload, casting any supported numeric dtype to f32.
///
/// The reader resolves stored byte order, so both `<f4` and `>f4` archives
/// yield identical values here.
fn read_values_as_f32<R: io::Read>(npy: NpyFile<R>) -> Result<Vec<f32>> {
    let dtype = npy.dtype();
    let type_str = match &dtype {
        DType::Plain(ts) => ts.to_string(),
        DType::Record(_) => bail!("Record dtypes are not numeric arrays"),
        DType::Array(_, _) => bail!("Array dtypes are not numeric arrays"),
    };

    // Type strings look like "<f4" or "|u1": a byte-order mark followed by a
    // type code and an element width.
    let values = match &type_str[1..] {
        "f4" => npy.into_vec::<f32>()?,
        "f8" => npy.into_vec::<f64>()?.into_iter().map(|v| v as f32).collect(),
        "i1" => npy.into_vec::<i8>()?.into_iter().map(f32::from).collect(),
        "i2" => npy.into_vec::<i16>()?.into_iter().map(f32::from).collect(),
        "i4" => npy.into_vec::<i32>()?.into_iter().map(|v| v as f32).collect(),
        "i8" => npy.into_vec::<i64>()?.into_iter().map(|v| v as f32).collect(),
        "u1" => npy.into_vec::<u8>()?.into_iter().map(f32::from).collect(),
        "u2" => npy.into_vec::<u16>()?.into_iter().map(f32::from).collect(),
        "u4" => npy.into_vec::<u32>()?.into_iter().map(|v| v as f32).collect(),
        "u8" => npy.into_vec::<u64>()?.into_iter().map(|v| v as f32).collect(),
        _ => bail!("Unsupported element type {type_str}"),
    };
    Ok(values)
}
