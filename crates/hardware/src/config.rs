//! Simulator configuration.
//!
//! Configuration is plain data with serde support:
//! 1. **Defaults:** Every field defaults to the reference benchmark values,
//!    so `SimConfig::default()` needs no file.
//! 2. **Loading:** [`SimConfig::from_json`] parses a JSON document; absent
//!    fields and absent sections fall back to their defaults.
//! 3. **Validation:** [`SimConfig::validate`] rejects degenerate parameter
//!    combinations before a simulation starts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default configuration values.
pub mod defaults {
    /// Number of instructions each benchmark executes.
    pub const INSTRUCTIONS: u64 = 20_000;
    /// Size of the shared instruction/data memory, in 32-bit words.
    pub const MEMORY_WORDS: usize = 8192;
    /// CPU clock frequency in MHz, used for MIPS.
    pub const CLOCK_MHZ: u64 = 1000;

    pub(super) const fn instructions() -> u64 {
        INSTRUCTIONS
    }

    pub(super) const fn memory_words() -> usize {
        MEMORY_WORDS
    }

    pub(super) const fn clock_mhz() -> u64 {
        CLOCK_MHZ
    }
}

/// Errors produced while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration document is not valid JSON.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A parameter value is out of range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// General simulation parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// CPU clock frequency in MHz, used for MIPS.
    #[serde(default = "defaults::clock_mhz")]
    pub clock_mhz: u64,

    /// Enables per-cycle pipeline tracing on stderr.
    #[serde(default)]
    pub trace: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            clock_mhz: defaults::CLOCK_MHZ,
            trace: false,
        }
    }
}

/// Benchmark program parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProgramConfig {
    /// Number of instructions each benchmark executes.
    #[serde(default = "defaults::instructions")]
    pub instructions: u64,

    /// Size of the shared instruction/data memory, in 32-bit words.
    #[serde(default = "defaults::memory_words")]
    pub memory_words: usize,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            instructions: defaults::INSTRUCTIONS,
            memory_words: defaults::MEMORY_WORDS,
        }
    }
}

/// Top-level simulator configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimConfig {
    /// General simulation parameters.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Benchmark program parameters.
    #[serde(default)]
    pub program: ProgramConfig,
}

impl SimConfig {
    /// Parses a configuration from a JSON document.
    ///
    /// # Arguments
    ///
    /// * `json` - The JSON text. Absent fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed JSON or unknown fields,
    /// and [`ConfigError::Invalid`] if the parsed values fail validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`from_json`](Self::from_json).
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Checks parameter values for degenerate combinations.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.program.instructions == 0 {
            return Err(ConfigError::Invalid(String::from(
                "program.instructions must be at least 1",
            )));
        }
        if self.program.memory_words == 0 {
            return Err(ConfigError::Invalid(String::from(
                "program.memory_words must be at least 1",
            )));
        }
        if self.general.clock_mhz == 0 {
            return Err(ConfigError::Invalid(String::from(
                "general.clock_mhz must be at least 1",
            )));
        }
        Ok(())
    }
}
