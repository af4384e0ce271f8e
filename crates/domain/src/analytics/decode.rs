// domain analytics: stride-based word selection
use std::iter::FusedIterator;

use stride_decode_shared_kernel::Word;

use crate::model::Pair;

/// Gap between the first and second selected index.
pub const INITIAL_STRIDE: usize = 2;

/// Yields the indices `0, 2, 5, 9, 14, ...` that are below `len`.
///
/// Each gap is one larger than the previous, starting from [`INITIAL_STRIDE`].
#[derive(Debug, Clone)]
pub struct StrideIndices {
    next: Option<usize>,
    stride: usize,
    len: usize,
}

impl StrideIndices {
    pub fn new(len: usize) -> Self {
        Self { next: Some(0), stride: INITIAL_STRIDE, len }
    }
}

impl Iterator for StrideIndices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.next.filter(|&idx| idx < self.len)?;
        self.next = current.checked_add(self.stride);
        self.stride = self.stride.saturating_add(1);
        Some(current)
    }
}

impl FusedIterator for StrideIndices {}

/// Words at the stride positions, in order.
pub fn select_words(pairs: &[Pair]) -> Vec<&Word> {
    StrideIndices::new(pairs.len()).map(|idx| pairs[idx].word()).collect()
}

/// Joins the selected words with single spaces. Empty input gives an empty string.
pub fn decode(pairs: &[Pair]) -> String {
    select_words(pairs)
        .into_iter()
        .map(Word::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}
