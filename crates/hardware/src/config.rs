//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Reference behavior with unknown-opcode diagnostics enabled.
//! 2. **Structures:** A root `Config` holding `GeneralConfig`.
//! 3. **Enums:** The policy applied to opcodes outside the supported subset.
//!
//! Configuration is supplied as JSON (see `Config::from_json`) or built with
//! `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::LoadError;

/// Handling of opcodes outside the supported subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownOpcodePolicy {
    /// Silent no-op: no memory access, no register write, PC advances.
    Ignore,
    /// No-op as with `Ignore`, but the opcode is logged, counted and
    /// reported in the cycle report.
    #[default]
    Warn,
    /// Abort the run with `SimError::IllegalInstruction`.
    Fault,
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// ```
/// use rvss_core::config::{Config, UnknownOpcodePolicy};
///
/// let config = Config::default();
/// assert!(config.general.trace_cycles);
/// assert_eq!(config.general.unknown_opcode, UnknownOpcodePolicy::Warn);
///
/// let json = r#"{ "general": { "unknown_opcode": "fault", "max_cycles": 500 } }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.unknown_opcode, UnknownOpcodePolicy::Fault);
/// assert_eq!(config.general.max_cycles, Some(500));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the document is not valid configuration JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read and
    /// `ConfigError::Parse` if its contents are not valid configuration JSON.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| {
            ConfigError::Io(LoadError::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;
        Ok(Self::from_json(&text)?)
    }
}

/// Failure while reading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error(transparent)]
    Io(LoadError),
    /// The file is not valid configuration JSON.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Write the per-cycle register and state trace files
    #[serde(default = "GeneralConfig::default_trace_cycles")]
    pub trace_cycles: bool,

    /// What to do when an opcode outside the supported subset is decoded
    #[serde(default)]
    pub unknown_opcode: UnknownOpcodePolicy,

    /// Abort once this many cycles have run without halting (unbounded when unset)
    #[serde(default)]
    pub max_cycles: Option<u64>,
}

impl GeneralConfig {
    /// Trace files are written unless disabled.
    const fn default_trace_cycles() -> bool {
        true
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_cycles: true,
            unknown_opcode: UnknownOpcodePolicy::default(),
            max_cycles: None,
        }
    }
}
