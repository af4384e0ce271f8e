use serde::Serialize;
use stride_decode_shared_kernel::{OrderKey, Word};

/// A word together with the key that orders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pair {
    key: OrderKey,
    word: Word,
}

impl Pair {
    pub fn new(key: impl Into<OrderKey>, word: impl Into<Word>) -> Self {
        Self { key: key.into(), word: word.into() }
    }

    #[inline]
    pub fn key(&self) -> OrderKey {
        self.key
    }

    #[inline]
    pub fn word(&self) -> &Word {
        &self.word
    }
}
