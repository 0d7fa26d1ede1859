use crate::core::ErrorMode;
use crate::utils::error::{EtlError, Result};
use regex::{Captures, Regex};
use serde::Deserialize;
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

/// 批次設定檔
///
/// ```toml
/// [source]
/// path = "accents.txt"
///
/// [load]
/// output_path = "accents.json"
///
/// [error_handling]
/// mode = "collect"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub load: Option<LoadConfig>,
    pub error_handling: Option<ErrorHandlingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoadConfig {
    pub output_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorHandlingConfig {
    pub mode: Option<ErrorMode>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ACCENTS_DIR})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn output_path(&self) -> Option<&str> {
        self.load.as_ref().and_then(|l| l.output_path.as_deref())
    }

    pub fn error_mode_override(&self) -> Option<ErrorMode> {
        self.error_handling.as_ref().and_then(|e| e.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[source]
path = "accents.txt"

[load]
output_path = "out/accents.json"

[error_handling]
mode = "fail-fast"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.source.path, "accents.txt");
        assert_eq!(config.output_path(), Some("out/accents.json"));
        assert_eq!(config.error_mode_override(), Some(ErrorMode::FailFast));
    }

    #[test]
    fn test_optional_sections_default() {
        let config = TomlConfig::from_toml_str("[source]\npath = \"accents.txt\"\n").unwrap();
        assert_eq!(config.output_path(), None);
        assert_eq!(config.error_mode_override(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ACCENT_ETL_TEST_DIR", "/data/dict");

        let toml_content = r#"
[source]
path = "${ACCENT_ETL_TEST_DIR}/accents.txt"

[load]
output_path = "${ACCENT_ETL_TEST_UNSET}/accents.json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.path, "/data/dict/accents.txt");
        assert_eq!(
            config.output_path(),
            Some("${ACCENT_ETL_TEST_UNSET}/accents.json")
        );

        std::env::remove_var("ACCENT_ETL_TEST_DIR");
    }

    #[test]
    fn test_unknown_error_mode_is_rejected() {
        let toml_content = r#"
[source]
path = "accents.txt"

[error_handling]
mode = "retry"
"#;

        let err = TomlConfig::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, EtlError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_missing_source_path_is_rejected() {
        let err = TomlConfig::from_toml_str("[load]\noutput_path = \"a.json\"\n").unwrap_err();
        assert!(matches!(err, EtlError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[source]\npath = \"file-test.txt\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.source.path, "file-test.txt");
    }
}
