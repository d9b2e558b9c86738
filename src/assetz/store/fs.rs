use super::format::{read_records, write_records};
use super::{Backend, ParsedRows};
use crate::error::Result;
use crate::model::Record;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_FILENAME: &str = "Asset.txt";

pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl Default for FileBackend {
    fn default() -> Self {
        Self::new(DEFAULT_FILENAME)
    }
}

impl Backend for FileBackend {
    fn read(&self) -> Result<Option<ParsedRows>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let file = File::open(&self.path)?;
        read_records(file).map(Some)
    }

    fn write(&mut self, records: &[Record]) -> Result<()> {
        self.ensure_parent_dir()?;
        // Truncates in place; there is no temp file to fall back on.
        let file = File::create(&self.path)?;
        write_records(file, records)?;
        debug!(path = %self.path.display(), count = records.len(), "wrote data file");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
