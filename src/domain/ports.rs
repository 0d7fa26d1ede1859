use crate::domain::model::{ExtractResult, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::Deserialize;
use tokio::io::AsyncBufRead;

/// How the pipeline reacts to a line it cannot parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ErrorMode {
    /// Abort on the first bad line.
    #[default]
    FailFast,
    /// Parse every line, then abort listing all bad lines.
    Collect,
    /// Warn about bad lines and leave them out of the index.
    Skip,
}

pub trait Storage: Send + Sync {
    type Reader: AsyncBufRead + Unpin + Send;

    fn open_lines(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = Result<Self::Reader>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    /// `None` means standard output.
    fn output_path(&self) -> Option<&str>;
    fn error_mode(&self) -> ErrorMode;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<ExtractResult>;
    async fn transform(&self, extracted: ExtractResult) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
