use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::records::CardRecord;

pub const MEDIA_JSON: &str = "application/json";
pub const MEDIA_CSV: &str = "text/csv";

/// Delivery capability: write a named artifact with a media type.
/// Extraction code never touches the filesystem directly, so the
/// pipeline stays testable without one.
pub trait OutputSink {
    fn write(&self, name: &str, media_type: &str, bytes: &[u8]) -> Result<PathBuf>;
}

/// Sink that saves artifacts into a directory, creating it if needed.
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirSink { dir: dir.into() }
    }
}

impl OutputSink for DirSink {
    fn write(&self, name: &str, _media_type: &str, bytes: &[u8]) -> Result<PathBuf> {
        ensure_directory(&self.dir)?;
        let path = self.dir.join(name);
        fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))
}

/// Records → pretty JSON (2-space indent) → sink, under the given name.
pub fn deliver_records(
    records: &[CardRecord],
    name: &str,
    sink: &dyn OutputSink,
) -> Result<PathBuf> {
    let bytes = serde_json::to_vec_pretty(records)?;
    sink.write(name, MEDIA_JSON, &bytes)
}
