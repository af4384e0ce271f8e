// domain analytics: parsing and ordering of keyed lines
use stride_decode_shared_kernel::{DomainError, DomainResult, LineNumber, OrderKey};

use crate::{model::Pair, options::InvalidKeyPolicy};

/// Splits a line on single spaces, returning `(key, word)` only when there are
/// exactly two tokens. Consecutive spaces yield empty tokens.
#[inline]
pub fn split_pair(line: &str) -> Option<(&str, &str)> {
    let mut tokens = line.split(' ');
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(key), Some(word), None) => Some((key, word)),
        _ => None,
    }
}

/// ソート結果と、取りこぼした行の内訳
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortOutcome {
    /// Ascending by key; equal keys keep input order.
    pub pairs: Vec<Pair>,
    /// Lines that did not split into exactly two tokens.
    pub malformed: usize,
    /// Two-token lines dropped under [`InvalidKeyPolicy::Skip`].
    pub invalid_keys: usize,
}

impl SortOutcome {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// 行を `Pair` に変換し、キー昇順に安定ソートする
#[derive(Debug, Clone, Copy, Default)]
pub struct PairSorter {
    policy: InvalidKeyPolicy,
}

impl PairSorter {
    pub fn new(policy: InvalidKeyPolicy) -> Self {
        Self { policy }
    }

    /// Parses and sorts `lines`.
    ///
    /// Lines with a token count other than two are dropped silently. A
    /// two-token line with a non-integer key either aborts the sort or is
    /// dropped, depending on the policy.
    pub fn sort<I, S>(&self, lines: I) -> DomainResult<SortOutcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut outcome = SortOutcome::default();

        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let Some((key_token, word)) = split_pair(line) else {
                log::debug!("dropping line {}: expected 2 tokens", LineNumber::from_index(index));
                outcome.malformed += 1;
                continue;
            };

            match key_token.parse::<OrderKey>() {
                Ok(key) => outcome.pairs.push(Pair::new(key, word)),
                Err(source) => {
                    let line = LineNumber::from_index(index);
                    match self.policy {
                        InvalidKeyPolicy::Fail => {
                            return Err(DomainError::InvalidKey { line, token: key_token.to_string(), source });
                        }
                        InvalidKeyPolicy::Skip => {
                            log::warn!("skipping line {line}: invalid order key '{key_token}' ({source})");
                            outcome.invalid_keys += 1;
                        }
                    }
                }
            }
        }

        outcome.pairs.sort_by_key(Pair::key);
        Ok(outcome)
    }
}

// ============================================================================
// Tests
// ============================================================================
