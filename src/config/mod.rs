#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

use crate::adapters::csv_reader::CsvRecordReader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Effective settings after merging the config file and command-line flags.
#[derive(Debug, Clone)]
pub struct Settings {
    pub source: String,
    pub base_dir: Option<String>,
    pub delimiter: u8,
    pub format: OutputFormat,
}

impl Settings {
    pub fn reader(&self) -> CsvRecordReader {
        let reader = CsvRecordReader::new().with_delimiter(self.delimiter);
        match &self.base_dir {
            Some(base_dir) => reader.with_base_path(base_dir),
            None => reader,
        }
    }
}
