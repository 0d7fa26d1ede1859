use crate::config::toml_config::TomlConfig;
use crate::config::{RunConfig, DEFAULT_INPUT_PATH};
use crate::core::{ErrorMode, Storage};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;
use tokio::fs::{self, File};
use tokio::io::BufReader;

#[derive(Debug, Clone, Parser)]
#[command(name = "accent-etl")]
#[command(about = "Build a JSON pitch-accent index from a tab-separated accent dictionary")]
pub struct CliConfig {
    /// Dictionary file: vocab<TAB>reading<TAB>accents per line
    #[arg(short, long)]
    pub input: Option<String>,

    /// Write the JSON index to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// What to do with lines that cannot be parsed
    #[arg(long, value_enum)]
    pub error_mode: Option<ErrorMode>,

    /// TOML configuration file; command line flags take precedence
    #[arg(short, long)]
    pub config: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Defaults, then the TOML file, then explicit flags.
    pub fn resolve(&self) -> Result<RunConfig> {
        let mut config = RunConfig::new(DEFAULT_INPUT_PATH);

        if let Some(path) = &self.config {
            let toml = TomlConfig::from_file(path)?;
            config = config.merge_toml(&toml);
        }
        if let Some(input) = &self.input {
            config.input_path = input.clone();
        }
        if let Some(output) = &self.output {
            config.output_path = Some(output.clone());
        }
        if let Some(mode) = self.error_mode {
            config.error_mode = mode;
        }

        Ok(config)
    }
}

/// File-backed storage. Relative paths resolve against `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    type Reader = BufReader<File>;

    async fn open_lines(&self, path: &str) -> Result<Self::Reader> {
        let file = File::open(self.resolve(path)).await?;
        Ok(BufReader::new(file))
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        fs::write(full_path, data).await?;
        Ok(())
    }
}
