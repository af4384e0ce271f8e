// crates/infra/src/source.rs
use std::path::{Path, PathBuf};

use stride_decode_ports::input::LineSource;
use stride_decode_shared_kernel::{InfrastructureError, Result};

use crate::persistence::{FileReader, normalize_lines};

/// Reads the encoded message from a file on disk.
#[derive(Debug, Clone)]
pub struct FileLineSource {
    path: PathBuf,
}

impl FileLineSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FileLineSource {
    fn read_lines(&self) -> Result<Vec<String>> {
        let content = FileReader::read_to_string(&self.path)
            .map_err(|source| InfrastructureError::FileRead { path: self.path.clone(), source })?;
        log::debug!("read {} bytes from {}", content.len(), self.path.display());
        Ok(normalize_lines(&content))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Reads the encoded message from standard input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinLineSource;

impl LineSource for StdinLineSource {
    fn read_lines(&self) -> Result<Vec<String>> {
        let content = FileReader::read_all(&mut std::io::stdin().lock())
            .map_err(|source| InfrastructureError::FileRead { path: PathBuf::from("-"), source })?;
        log::debug!("read {} bytes from stdin", content.len());
        Ok(normalize_lines(&content))
    }

    fn describe(&self) -> String {
        "<stdin>".to_string()
    }
}
