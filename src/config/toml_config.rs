use crate::utils::error::{InsightsError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    #[serde(default)]
    pub output: Option<OutputConfig>,
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: String,
    pub delimiter: Option<String>,
    pub base_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| InsightsError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| InsightsError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn source_path(&self) -> &str {
        &self.source.path
    }

    pub fn base_dir(&self) -> Option<&str> {
        self.source.base_dir.as_deref()
    }

    pub fn delimiter(&self) -> Result<u8> {
        match &self.source.delimiter {
            Some(d) => validation::validate_delimiter("source.delimiter", d),
            None => Ok(b','),
        }
    }

    pub fn output_format(&self) -> &str {
        self.output
            .as_ref()
            .map(|o| o.format.as_str())
            .unwrap_or("text")
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("source.path", &self.source.path)?;
        if let Some(base_dir) = self.base_dir() {
            validation::validate_path("source.base_dir", base_dir)?;
        }
        self.delimiter()?;
        validation::validate_one_of("output.format", self.output_format(), &OUTPUT_FORMATS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[source]
path = "data/jobs.csv"
delimiter = ";"

[output]
format = "json"

[logging]
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.source_path(), "data/jobs.csv");
        assert_eq!(config.delimiter().unwrap(), b';');
        assert_eq!(config.output_format(), "json");
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let config = TomlConfig::from_toml_str("[source]\npath = \"jobs.csv\"\n").unwrap();

        assert_eq!(config.delimiter().unwrap(), b',');
        assert_eq!(config.output_format(), "text");
        assert_eq!(config.log_level(), None);
        assert_eq!(config.base_dir(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("JOB_INSIGHTS_TEST_DATA_DIR", "/srv/data");

        let toml_content = r#"
[source]
path = "jobs.csv"
base_dir = "${JOB_INSIGHTS_TEST_DATA_DIR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.base_dir(), Some("/srv/data"));

        std::env::remove_var("JOB_INSIGHTS_TEST_DATA_DIR");
    }

    #[test]
    fn test_unset_env_var_is_left_alone() {
        let toml_content = r#"
[source]
path = "${JOB_INSIGHTS_TEST_UNSET_VAR}/jobs.csv"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source_path(), "${JOB_INSIGHTS_TEST_UNSET_VAR}/jobs.csv");
    }

    #[test]
    fn test_config_validation() {
        let bad_format = r#"
[source]
path = "jobs.csv"

[output]
format = "xml"
"#;
        let config = TomlConfig::from_toml_str(bad_format).unwrap();
        assert!(config.validate().is_err());

        let bad_delimiter = r#"
[source]
path = "jobs.csv"
delimiter = "::"
"#;
        let config = TomlConfig::from_toml_str(bad_delimiter).unwrap();
        assert!(config.validate().is_err());

        let empty_path = "[source]\npath = \"\"\n";
        let config = TomlConfig::from_toml_str(empty_path).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_source_is_config_error() {
        let err = TomlConfig::from_toml_str("[output]\nformat = \"text\"\n").unwrap_err();
        assert!(matches!(err, InsightsError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[source]\npath = \"file-test.csv\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.source_path(), "file-test.csv");
    }
}
