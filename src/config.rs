// src/config.rs
use std::path::PathBuf;

use stride_decode_domain::InvalidKeyPolicy;
use stride_decode_shared_kernel::{PresentationError, PresentationResult};

use crate::{cli::Args, logging::Verbosity};

/// Output format options for the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The decoded message alone.
    #[default]
    Text,
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

/// Where the encoded message is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl From<PathBuf> for InputSource {
    fn from(path: PathBuf) -> Self {
        if path.as_os_str() == "-" { Self::Stdin } else { Self::File(path) }
    }
}

/// Fully resolved run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: InputSource,
    pub policy: InvalidKeyPolicy,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub verbosity: Verbosity,
}

impl Config {
    pub fn for_file(path: impl Into<PathBuf>) -> Self {
        Self {
            input: InputSource::File(path.into()),
            policy: InvalidKeyPolicy::default(),
            format: OutputFormat::default(),
            output: None,
            verbosity: Verbosity::default(),
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = PresentationError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        validate_path("INPUT", &args.input)?;
        if let Some(output) = &args.output {
            validate_path("--output", output)?;
        }

        Ok(Self {
            input: InputSource::from(args.input),
            policy: args.on_invalid_key.into(),
            format: args.format.into(),
            output: args.output,
            verbosity: Verbosity::from_flags(args.verbose, args.quiet),
        })
    }
}

fn validate_path(flag: &str, path: &std::path::Path) -> PresentationResult<()> {
    if path.as_os_str().is_empty() {
        return Err(PresentationError::InvalidValue {
            flag: flag.to_string(),
            value: String::new(),
            reason: "path must not be empty".to_string(),
        });
    }
    Ok(())
}
