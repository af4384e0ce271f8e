// crates/ports/src/output.rs
use stride_decode_shared_kernel::Result;

/// Port for delivering the rendered result.
pub trait MessageSink {
    fn emit(&self, rendered: &str) -> Result<()>;
}
