//! Rendering configs as text.

use std::fmt;
use std::str::FromStr;

use crate::config::schema::DaemonConfig;
use crate::error::{Result, TestkitError};

/// Text format for a rendered config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Toml,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Toml => write!(f, "toml"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = TestkitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "toml" => Ok(OutputFormat::Toml),
            "json" => Ok(OutputFormat::Json),
            _ => Err(TestkitError::UnknownFormat(s.to_string())),
        }
    }
}

/// Render a config in the requested format.
pub fn render(config: &DaemonConfig, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Toml => toml::to_string_pretty(config)?,
        OutputFormat::Json => serde_json::to_string_pretty(config)?,
    };
    tracing::debug!(%format, bytes = text.len(), "Rendered daemon config");
    Ok(text)
}
