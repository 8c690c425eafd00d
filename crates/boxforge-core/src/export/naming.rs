//! Output file naming
//!
//! Concurrent exports are only safe when each uses its own file names, so
//! per-request names combine a millisecond timestamp, the dimensions and a
//! process-wide sequence number.

use crate::fmt_real;
use crate::mesh::Dimensions;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Base name (no extension) shared by the artifacts of one export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportName {
    stem: String,
}

impl ExportName {
    /// Wrap an explicit base name
    pub fn new(stem: impl Into<String>) -> Self {
        Self { stem: stem.into() }
    }

    /// `object_<w>_<h>_<d>`; the same dimensions always map to the same files
    pub fn legacy(dims: &Dimensions) -> Self {
        Self::new(format!(
            "object_{}_{}_{}",
            fmt_real(dims.width),
            fmt_real(dims.height),
            fmt_real(dims.depth)
        ))
    }

    /// `box_<millis>_<w>x<h>x<d>_<seq>`, distinct for every call in this process
    pub fn unique(dims: &Dimensions) -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self::unique_at(dims, millis, seq)
    }

    /// Per-request name with an explicit timestamp and sequence number
    pub fn unique_at(dims: &Dimensions, millis: u128, seq: u64) -> Self {
        Self::new(format!(
            "box_{}_{}x{}x{}_{}",
            millis,
            fmt_real(dims.width),
            fmt_real(dims.height),
            fmt_real(dims.depth),
            seq
        ))
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn obj_file(&self) -> String {
        format!("{}.obj", self.stem)
    }

    pub fn mtl_file(&self) -> String {
        format!("{}.mtl", self.stem)
    }

    pub fn zip_file(&self) -> String {
        format!("{}.zip", self.stem)
    }

    /// Geometry path inside `dir`
    pub fn obj_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.obj_file())
    }

    /// Archive path inside `dir`
    pub fn zip_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.zip_file())
    }
}
