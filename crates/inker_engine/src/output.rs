use std::ffi::OsStr;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Deterministic sibling path for the recognized text:
/// `<base>_output.txt` in the source file's directory. Pure, no I/O.
pub fn derive_output_path(source: &Path) -> PathBuf {
    let stem = source.file_stem().unwrap_or_else(|| OsStr::new("output"));
    let mut name = stem.to_os_string();
    name.push("_output.txt");
    source.with_file_name(name)
}

/// Writes recognized text as UTF-8, replacing any previous file at the
/// target path by writing a temp file then renaming.
#[derive(Debug, Default, Clone, Copy)]
pub struct OutputWriter;

impl OutputWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn persist(&self, path: &Path, text: &str) -> Result<(), PersistError> {
        // The temp file goes into the target directory so the final rename
        // stays on one filesystem. A bare file name writes into the cwd.
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(text.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        // Replace existing file if present to keep determinism.
        if path.exists() {
            fs::remove_file(path)?;
        }
        tmp.persist(path).map_err(|e| PersistError::Io(e.error))?;
        Ok(())
    }
}
