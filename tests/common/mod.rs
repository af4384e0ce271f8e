// tests/common/mod.rs
//! 共通テストユーティリティ

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Temporary directory holding encoded message fixtures.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().expect("create temp dir") }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("write fixture");
        path
    }

    /// Writes one `<key> <word>` line per entry.
    pub fn write_pairs(&self, name: &str, pairs: &[(i64, &str)]) -> PathBuf {
        let body: String = pairs.iter().map(|(k, w)| format!("{k} {w}\n")).collect();
        self.write(name, &body)
    }
}
