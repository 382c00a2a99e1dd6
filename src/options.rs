//! Centralized viewer/risk options with TOML preset support.
//!
//! All tweakable settings (structure choice, visualization style, risk
//! threshold, mutation highlighting) are consolidated here. Options
//! serialize to/from TOML; all sub-structs use `#[serde(default)]` so
//! partial files (e.g. only overriding `[risk]`) work correctly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SynviewError;
use crate::viewer::{ColorScheme, ViewStyle};

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Structure choice and display style.
    pub viewer: ViewerOptions,
    /// Risk overlay parameters.
    pub risk: RiskOptions,
}

/// Structure and display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerOptions {
    /// PDB id (or local file path) of the structure to show.
    pub structure: String,
    /// Whole-structure visualization style.
    pub style: ViewStyle,
    /// Base coloring scheme.
    pub color_scheme: ColorScheme,
    /// Whether to label known disease mutations.
    pub highlight_mutations: bool,
    /// Mutation names to highlight when enabled.
    pub mutations: Vec<String>,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            structure: "1XQ8".to_owned(),
            style: ViewStyle::default(),
            color_scheme: ColorScheme::default(),
            highlight_mutations: true,
            mutations: vec![
                "A53T".to_owned(),
                "A30P".to_owned(),
                "E46K".to_owned(),
            ],
        }
    }
}

/// Risk overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RiskOptions {
    /// Whether to color residues by aggregation risk.
    pub overlay: bool,
    /// Region segmentation threshold. The UI exposes 30–90 in steps of
    /// 10; the scorer itself accepts any value.
    pub threshold: f64,
}

impl Default for RiskOptions {
    fn default() -> Self {
        Self {
            overlay: true,
            threshold: 60.0,
        }
    }
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`SynviewError::Io`] when the file cannot be read,
    /// [`SynviewError::OptionsParse`] when it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, SynviewError> {
        let content = std::fs::read_to_string(path).map_err(SynviewError::Io)?;
        toml::from_str(&content)
            .map_err(|e| SynviewError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`SynviewError::OptionsParse`] when serialization fails,
    /// [`SynviewError::Io`] when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), SynviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SynviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SynviewError::Io)?;
        }
        std::fs::write(path, content).map_err(SynviewError::Io)
    }
}
