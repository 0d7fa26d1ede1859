pub mod etl;
pub mod index;
pub mod parser;
pub mod pipeline;

pub use crate::domain::model::{
    AccentGroup, Entry, ExtractResult, ReadingEntry, RunStats, TransformResult,
};
pub use crate::domain::ports::{ConfigProvider, ErrorMode, Pipeline, Storage};
pub use crate::utils::error::Result;
