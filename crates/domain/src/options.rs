// crates/domain/src/options.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// What to do with a two-token line whose first token is not an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidKeyPolicy {
    /// Abort the whole decode with a diagnostic naming the line.
    #[default]
    Fail,
    /// Drop the line and keep going.
    Skip,
}

impl InvalidKeyPolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::Skip => "skip",
        }
    }
}

impl FromStr for InvalidKeyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" => Ok(Self::Fail),
            "skip" => Ok(Self::Skip),
            other => Err(format!("unknown invalid-key policy: {other} (expected fail|skip)")),
        }
    }
}

impl fmt::Display for InvalidKeyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
