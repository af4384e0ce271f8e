// src/presentation.rs
use stride_decode_shared_kernel::Result;
use stride_decode_usecase::DecodeReport;

use crate::config::OutputFormat;

/// Renders a report without a trailing newline; sinks add it.
pub fn render(report: &DecodeReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.message.clone()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        #[cfg(feature = "yaml")]
        OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?.trim_end().to_string()),
    }
}
