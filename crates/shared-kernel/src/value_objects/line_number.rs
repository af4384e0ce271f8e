// crates/shared-kernel/src/value_objects/line_number.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// 1-based position of a line among the non-empty input lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineNumber(usize);

impl LineNumber {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    /// Converts a 0-based index into a line number.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self(index.saturating_add(1))
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }
}

impl From<usize> for LineNumber {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for LineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
