use serde::Serialize;

/// Result of one decode run, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeReport {
    pub source: String,
    pub message: String,
    /// Non-empty lines returned by the source.
    pub lines_read: usize,
    /// Lines accepted as pairs.
    pub pairs: usize,
    pub malformed_lines: usize,
    pub invalid_keys: usize,
    /// Words that made it into the message.
    pub selected: usize,
}
