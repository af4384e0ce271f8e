// crates/ports/src/input.rs
use stride_decode_shared_kernel::Result;

/// Port for loading the encoded message.
///
/// Implementations return the content lowercased and split into lines, with
/// empty lines removed and the remaining order preserved.
pub trait LineSource {
    fn read_lines(&self) -> Result<Vec<String>>;

    /// Human-readable origin used in diagnostics.
    fn describe(&self) -> String;
}
