use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the assembled wrapper file in one shot.
pub struct FileWriter {
    output_path: PathBuf,
}

impl FileWriter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    /// Create-or-truncate the output path and write the full buffer. The
    /// handle is released when the call returns, and any existing file is
    /// overwritten unconditionally. There is no partial-write recovery: a
    /// failure mid-write leaves the file in an undefined state and surfaces
    /// as an I/O error.
    pub fn write_wrapper_file(&self, content: &str) -> Result<()> {
        fs::write(&self.output_path, content)?;
        Ok(())
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}
