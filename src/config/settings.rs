//! Report settings
//!
//! Settings are optional: without a settings file every field takes its
//! default, which reproduces the plain comma-separated, dollar-denominated
//! behaviour.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PayrollError;

/// User settings for report generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Field separator for input files
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Currency symbol placed before every amount
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_delimiter() -> char {
    ','
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, PayrollError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PayrollError::Config(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            PayrollError::Config(format!(
                "Failed to parse settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a file if one was given, else use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, PayrollError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// The reader splits on a single byte and breaks lines on `\n`/`\r`,
    /// so the delimiter must be ASCII and not a line terminator
    pub fn validate(&self) -> Result<(), PayrollError> {
        if !self.delimiter.is_ascii() {
            return Err(PayrollError::Config(format!(
                "Delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            )));
        }
        if matches!(self.delimiter, '\n' | '\r') {
            return Err(PayrollError::Config(format!(
                "Delimiter cannot be a line terminator, got {:?}",
                self.delimiter
            )));
        }
        Ok(())
    }

    /// Delimiter as the byte the reader splits on
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }
}
