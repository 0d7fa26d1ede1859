use crate::core::index::AccentIndex;
use crate::core::parser::{decode_line, parse_line};
use crate::core::{
    ConfigProvider, Entry, ErrorMode, ExtractResult, Pipeline, RunStats, Storage, TransformResult,
};
use crate::utils::error::{EtlError, LineError, Result};
use tokio::io::AsyncBufReadExt;

/// Reads an accent dictionary, indexes it by vocabulary and writes the JSON index.
pub struct AccentPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> AccentPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for AccentPipeline<S, C> {
    async fn extract(&self) -> Result<ExtractResult> {
        let input_path = self.config.input_path();
        let mode = self.config.error_mode();
        tracing::debug!("Reading {} (error mode: {:?})", input_path, mode);

        let mut reader = self.storage.open_lines(input_path).await?;
        let mut buf = Vec::new();
        let mut extracted = ExtractResult::default();
        let mut failures = Vec::new();

        // A line that is not valid UTF-8 is a parse error for that line only.
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
            }
            extracted.lines_read += 1;
            let line_number = extracted.lines_read;

            match decode_line(&buf).and_then(parse_line) {
                Ok(parsed) => extracted.entries.push(Entry {
                    line_number,
                    vocab: parsed.vocab,
                    reading: parsed.reading,
                    accents: parsed.accents,
                }),
                Err(error) => match mode {
                    ErrorMode::FailFast => {
                        return Err(EtlError::ParseError {
                            line_number,
                            source: error,
                        });
                    }
                    ErrorMode::Collect => failures.push(LineError { line_number, error }),
                    ErrorMode::Skip => {
                        tracing::warn!("Skipping line {}: {}", line_number, error);
                        extracted.lines_skipped += 1;
                    }
                },
            }
        }

        if !failures.is_empty() {
            return Err(EtlError::BatchError { errors: failures });
        }

        Ok(extracted)
    }

    async fn transform(&self, extracted: ExtractResult) -> Result<TransformResult> {
        let mut index = AccentIndex::new();
        let entries_indexed = extracted.entries.len();

        for entry in extracted.entries {
            tracing::trace!("Indexing line {}: {}", entry.line_number, entry.vocab);
            index.add(entry.vocab, entry.reading, entry.accents);
        }

        let stats = RunStats {
            lines_read: extracted.lines_read,
            lines_skipped: extracted.lines_skipped,
            entries_indexed,
            vocab_count: index.len(),
        };

        Ok(TransformResult { index, stats })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let json = result.index.to_json()?;

        match self.config.output_path() {
            Some(path) => {
                tracing::debug!("Writing {} bytes to {}", json.len(), path);
                self.storage.write_file(path, json.as_bytes()).await?;
                Ok(path.to_string())
            }
            None => {
                println!("{}", json);
                Ok("<stdout>".to_string())
            }
        }
    }
}
