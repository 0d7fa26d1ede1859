#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, ErrorMode};
use crate::utils::error::Result;
use crate::utils::validation::{validate_optional_path, validate_path, Validate};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// Input file used when nothing else is configured.
pub const DEFAULT_INPUT_PATH: &str = "accents.txt";

/// Settings for one run, after command line and TOML sources are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_path: String,
    pub output_path: Option<String>,
    pub error_mode: ErrorMode,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.to_string(),
            output_path: None,
            error_mode: ErrorMode::default(),
        }
    }
}

impl RunConfig {
    pub fn new(input_path: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            ..Self::default()
        }
    }

    pub fn with_output_path(mut self, output_path: impl Into<String>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }

    pub fn with_error_mode(mut self, error_mode: ErrorMode) -> Self {
        self.error_mode = error_mode;
        self
    }

    /// Values present in the TOML file replace the current ones.
    pub fn merge_toml(mut self, toml: &TomlConfig) -> Self {
        self.input_path = toml.source.path.clone();
        if let Some(output_path) = toml.output_path() {
            self.output_path = Some(output_path.to_string());
        }
        if let Some(mode) = toml.error_mode_override() {
            self.error_mode = mode;
        }
        self
    }
}

impl ConfigProvider for RunConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn error_mode(&self) -> ErrorMode {
        self.error_mode
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input_path)?;
        validate_optional_path("output", self.output_path.as_deref())?;
        Ok(())
    }
}
