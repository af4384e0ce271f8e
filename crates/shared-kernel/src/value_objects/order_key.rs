// crates/shared-kernel/src/value_objects/order_key.rs
use std::{fmt, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};

/// Numeric prefix that determines a word's position in the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderKey(i64);

impl OrderKey {
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl FromStr for OrderKey {
    type Err = ParseIntError;

    /// Accepts surrounding whitespace, an optional sign and decimal digits,
    /// where single underscores may separate digit groups (`1_000`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if has_grouping_underscores(trimmed) {
            trimmed.replace('_', "").parse::<i64>().map(Self)
        } else {
            // Misplaced underscores stay in and fail as an invalid digit.
            trimmed.parse::<i64>().map(Self)
        }
    }
}

/// True when `s` contains underscores and every one of them sits between two
/// ASCII digits.
fn has_grouping_underscores(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.contains(&b'_')
        && bytes.iter().enumerate().all(|(i, &b)| {
            b != b'_'
                || (i > 0
                    && bytes[i - 1].is_ascii_digit()
                    && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
        })
}

impl From<i64> for OrderKey {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl PartialEq<i64> for OrderKey {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
