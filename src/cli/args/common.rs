//! Common CLI types

use std::str::FromStr;

use clap::ValueEnum;

use crate::error::ConfigError;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - one "Label: value" line per field
    #[default]
    Pretty,
    /// Table format - two-column FIELD/VALUE table
    Table,
    /// JSON format - structured for scripts
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
            .map_err(|_| ConfigError::Invalid(format!("unknown output format '{}'", s)))
    }
}
