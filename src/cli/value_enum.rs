use clap::ValueEnum;
use stride_decode_domain::InvalidKeyPolicy;

use crate::config::OutputFormat;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Text,
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
            #[cfg(feature = "yaml")]
            CliOutputFormat::Yaml => OutputFormat::Yaml,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliInvalidKeyPolicy {
    Fail,
    Skip,
}

impl From<CliInvalidKeyPolicy> for InvalidKeyPolicy {
    fn from(value: CliInvalidKeyPolicy) -> Self {
        match value {
            CliInvalidKeyPolicy::Fail => InvalidKeyPolicy::Fail,
            CliInvalidKeyPolicy::Skip => InvalidKeyPolicy::Skip,
        }
    }
}
