use crate::core::parser::ParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Line {line_number}: {source}")]
    ParseError {
        line_number: usize,
        #[source]
        source: ParseError,
    },

    #[error("{} malformed line(s), first at line {}", .errors.len(), first_line(.errors))]
    BatchError { errors: Vec<LineError> },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// A parse failure tied to its 1-based input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    pub line_number: usize,
    pub error: ParseError,
}

impl std::fmt::Display for LineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line_number, self.error)
    }
}

fn first_line(errors: &[LineError]) -> usize {
    errors.first().map(|e| e.line_number).unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::IoError(_) => ErrorCategory::Io,
            EtlError::SerializationError(_)
            | EtlError::ParseError { .. }
            | EtlError::BatchError { .. } => ErrorCategory::Data,
            EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this failure. Always non-zero.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "Check that the input file exists (see --input)".to_string()
            }
            EtlError::IoError(_) => "Check file permissions and available disk space".to_string(),
            EtlError::SerializationError(_) => {
                "The index could not be encoded as JSON; please report this".to_string()
            }
            EtlError::ParseError {
                line_number,
                source: ParseError::InvalidUtf8 { .. },
            } => format!(
                "Re-save the input as UTF-8 (line {} has invalid bytes) or rerun with --error-mode skip",
                line_number
            ),
            EtlError::ParseError { line_number, .. } => format!(
                "Fix line {} (expected vocab<TAB>reading<TAB>accents) or rerun with --error-mode collect to list every bad line",
                line_number
            ),
            EtlError::BatchError { .. } => {
                "Fix the listed lines, or rerun with --error-mode skip to leave them out".to_string()
            }
            EtlError::ConfigValidationError { .. } => {
                "Check the configuration file syntax".to_string()
            }
            EtlError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for {}", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::BatchError { errors } => {
                let mut message = format!("{} malformed line(s) in the input:", errors.len());
                for error in errors {
                    message.push_str("\n  ");
                    message.push_str(&error.to_string());
                }
                message
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
