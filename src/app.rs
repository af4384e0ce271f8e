// src/app.rs
use stride_decode_infra::{FileLineSource, FileSink, StdinLineSource, StdoutSink};
use stride_decode_ports::{input::LineSource, output::MessageSink};
use stride_decode_shared_kernel::Result;
use stride_decode_usecase::{DecodeMessage, DecodeReport};

use crate::{
    config::{Config, InputSource},
    presentation,
};

/// Reads, decodes, renders and emits according to `config`.
pub fn run(config: &Config) -> Result<DecodeReport> {
    let source: Box<dyn LineSource> = match &config.input {
        InputSource::File(path) => Box::new(FileLineSource::new(path)),
        InputSource::Stdin => Box::new(StdinLineSource),
    };
    log::debug!("decoding {} with policy {}", source.describe(), config.policy);
    let report = DecodeMessage::new(source.as_ref(), config.policy).run()?;

    let rendered = presentation::render(&report, config.format)?;
    let sink: Box<dyn MessageSink> = match &config.output {
        Some(path) => Box::new(FileSink::new(path)),
        None => Box::new(StdoutSink),
    };
    sink.emit(&rendered)?;

    Ok(report)
}
