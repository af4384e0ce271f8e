// crates/infra/src/persistence/file_writer.rs
use std::{
    io::Write,
    path::{Path, PathBuf},
};

use stride_decode_shared_kernel::{InfraResult, InfrastructureError};
use tempfile::NamedTempFile;

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Replace `path` with `data` via a sibling temp file and rename, so readers
    /// never observe a partially written result.
    pub fn atomic_write(path: &Path, data: &[u8]) -> InfraResult<()> {
        let write_err = |source: std::io::Error| InfrastructureError::FileWrite { path: path.to_path_buf(), source };

        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut tmp = NamedTempFile::new_in(&parent).map_err(write_err)?;
        tmp.write_all(data).map_err(write_err)?;
        tmp.flush().map_err(write_err)?;
        // Best-effort fsync; the rename below still replaces the file atomically.
        if let Err(e) = tmp.as_file().sync_all() {
            log::debug!("fsync of temp file for {} failed: {e}", path.display());
        }
        tmp.persist(path).map_err(|e| write_err(e.error))?;

        log::debug!("wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }
}
