use stride_decode_domain::{InvalidKeyPolicy, PairSorter, StrideIndices, decode};
use stride_decode_ports::input::LineSource;
use stride_decode_shared_kernel::{ErrorContext, Result};

use crate::dto::DecodeReport;

pub struct DecodeMessage<'a> {
    source: &'a dyn LineSource,
    sorter: PairSorter,
}

impl<'a> DecodeMessage<'a> {
    pub fn new(source: &'a dyn LineSource, policy: InvalidKeyPolicy) -> Self {
        Self { source, sorter: PairSorter::new(policy) }
    }

    pub fn run(&self) -> Result<DecodeReport> {
        let origin = self.source.describe();
        let lines = self.source.read_lines()?;
        let lines_read = lines.len();

        let outcome = self
            .sorter
            .sort(&lines)
            .with_context(|| format!("decoding {origin}"))?;

        let message = decode(&outcome.pairs);
        let selected = StrideIndices::new(outcome.len()).count();

        log::info!(
            "{origin}: {lines_read} lines, {} pairs, {} malformed, {} invalid keys, {selected} words selected",
            outcome.len(),
            outcome.malformed,
            outcome.invalid_keys,
        );

        Ok(DecodeReport {
            source: origin,
            message,
            lines_read,
            pairs: outcome.len(),
            malformed_lines: outcome.malformed,
            invalid_keys: outcome.invalid_keys,
            selected,
        })
    }
}
