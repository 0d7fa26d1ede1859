pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use config::RunConfig;
pub use core::{etl::EtlEngine, index::AccentIndex, pipeline::AccentPipeline};
pub use domain::model::{AccentGroup, ReadingEntry};
pub use domain::ports::ErrorMode;
pub use utils::error::{EtlError, Result};
