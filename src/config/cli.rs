use crate::config::toml_config::{TomlConfig, OUTPUT_FORMATS};
use crate::config::{OutputFormat, Settings};
use crate::utils::error::{InsightsError, Result};
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "job-insights")]
#[command(about = "Query job listings: unique values, filters and salary ranges")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// CSV file with job listings (overrides source.path)
    #[arg(short, long)]
    pub source: Option<String>,

    /// Field delimiter (overrides source.delimiter)
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Output format: text or json (overrides output.format)
    #[arg(long)]
    pub format: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List distinct job types
    JobTypes,
    /// List distinct industries
    Industries,
    /// Highest max_salary in the source
    MaxSalary,
    /// Lowest min_salary in the source
    MinSalary,
    /// Print records matching every given filter
    Filter {
        #[arg(long)]
        job_type: Option<String>,
        #[arg(long)]
        industry: Option<String>,
        #[arg(long)]
        salary: Option<String>,
    },
    /// Check every record's salary range against a salary
    Match {
        #[arg(long)]
        salary: String,
    },
}

impl CliConfig {
    /// 合併設定檔與命令列參數，命令列優先
    pub fn resolve(&self) -> Result<Settings> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Some(config)
            }
            None => None,
        };

        let source = self
            .source
            .clone()
            .or_else(|| file_config.as_ref().map(|c| c.source_path().to_string()))
            .ok_or_else(|| InsightsError::ConfigError {
                message: "No data source given; use --source or a config file".to_string(),
            })?;

        let delimiter = match (&self.delimiter, &file_config) {
            (Some(d), _) => validation::validate_delimiter("--delimiter", d)?,
            (None, Some(config)) => config.delimiter()?,
            (None, None) => b',',
        };

        let format_name = self
            .format
            .as_deref()
            .or_else(|| file_config.as_ref().map(TomlConfig::output_format))
            .unwrap_or("text");
        let format = OutputFormat::parse(format_name).ok_or_else(|| {
            InsightsError::InvalidConfigValue {
                field: "format".to_string(),
                value: format_name.to_string(),
                reason: format!("Valid values: {}", OUTPUT_FORMATS.join(", ")),
            }
        })?;

        let settings = Settings {
            source,
            base_dir: file_config
                .as_ref()
                .and_then(|c| c.base_dir().map(str::to_string)),
            delimiter,
            format,
        };

        settings.validate()?;
        Ok(settings)
    }

    /// 只讀取設定檔中的日誌等級，在 logger 初始化之前使用
    pub fn configured_log_level(&self) -> Option<String> {
        let path = self.config.as_ref()?;
        TomlConfig::from_file(path)
            .ok()
            .and_then(|c| c.log_level().map(str::to_string))
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("source", &self.source)?;
        if let Some(base_dir) = &self.base_dir {
            validation::validate_path("source.base_dir", base_dir)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_filter_command() {
        let cli = CliConfig::parse_from([
            "job-insights",
            "--source",
            "jobs.csv",
            "filter",
            "--job-type",
            "FULL_TIME",
            "--salary",
            "50000",
        ]);

        let settings = cli.resolve().unwrap();
        assert_eq!(settings.source, "jobs.csv");
        assert_eq!(settings.delimiter, b',');
        assert_eq!(settings.format, OutputFormat::Text);

        match cli.command {
            Command::Filter {
                job_type,
                industry,
                salary,
            } => {
                assert_eq!(job_type.as_deref(), Some("FULL_TIME"));
                assert_eq!(industry, None);
                assert_eq!(salary.as_deref(), Some("50000"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_missing_source_is_config_error() {
        let cli = CliConfig::parse_from(["job-insights", "job-types"]);
        let err = cli.resolve().unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                b"[source]\npath = \"from-file.csv\"\ndelimiter = \";\"\nbase_dir = \"/data\"\n\n[output]\nformat = \"json\"\n",
            )
            .unwrap();
        let config_path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from(["job-insights", "-c", &config_path, "industries"]);
        let settings = cli.resolve().unwrap();
        assert_eq!(settings.source, "from-file.csv");
        assert_eq!(settings.delimiter, b';');
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.base_dir.as_deref(), Some("/data"));

        let cli = CliConfig::parse_from([
            "job-insights",
            "-c",
            &config_path,
            "--source",
            "override.csv",
            "--format",
            "text",
            "industries",
        ]);
        let settings = cli.resolve().unwrap();
        assert_eq!(settings.source, "override.csv");
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let cli = CliConfig::parse_from([
            "job-insights",
            "--source",
            "jobs.csv",
            "--format",
            "yaml",
            "max-salary",
        ]);
        assert!(matches!(
            cli.resolve().unwrap_err(),
            InsightsError::InvalidConfigValue { .. }
        ));
    }
}
