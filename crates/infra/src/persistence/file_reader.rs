use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// Lowercases `content` and splits it into lines, dropping empty ones.
///
/// `\n`, `\r\n` and a bare `\r` all terminate a line.
pub fn normalize_lines(content: &str) -> Vec<String> {
    content
        .to_lowercase()
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> std::io::Result<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }

    /// Read the whole file as UTF-8. The handle is closed before returning.
    pub fn read_to_string(path: &Path) -> std::io::Result<String> {
        let mut reader = Self::open_buffered(path)?;
        Self::read_all(&mut reader)
    }

    /// Drain any reader as UTF-8; invalid UTF-8 surfaces as `InvalidData`.
    pub fn read_all<R: Read>(reader: &mut R) -> std::io::Result<String> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Ok(buf)
    }
}
