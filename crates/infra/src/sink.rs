// crates/infra/src/sink.rs
use std::{
    io::Write,
    path::{Path, PathBuf},
};

use stride_decode_ports::output::MessageSink;
use stride_decode_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileWriter;

/// Writes the rendered output to stdout, followed by a newline.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl MessageSink for StdoutSink {
    fn emit(&self, rendered: &str) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{rendered}").map_err(InfrastructureError::from)?;
        handle.flush().map_err(InfrastructureError::from)?;
        Ok(())
    }
}

/// Atomically replaces a file with the rendered output.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MessageSink for FileSink {
    fn emit(&self, rendered: &str) -> Result<()> {
        let mut data = String::with_capacity(rendered.len() + 1);
        data.push_str(rendered);
        data.push('\n');
        FileWriter::atomic_write(&self.path, data.as_bytes())?;
        Ok(())
    }
}
