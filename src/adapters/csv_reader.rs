use crate::domain::model::Record;
use crate::domain::ports::RecordReader;
use crate::utils::error::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Reads job records from a CSV file with a header row.
#[derive(Debug, Clone)]
pub struct CsvRecordReader {
    base_path: Option<PathBuf>,
    delimiter: u8,
}

impl CsvRecordReader {
    pub fn new() -> Self {
        Self {
            base_path: None,
            delimiter: b',',
        }
    }

    /// Relative sources are resolved against `base_path`.
    pub fn with_base_path(mut self, base_path: impl Into<PathBuf>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    fn resolve(&self, source: &str) -> PathBuf {
        match &self.base_path {
            Some(base) => base.join(source),
            None => Path::new(source).to_path_buf(),
        }
    }

    /// Parses records from any reader; used by `read` and handy for in-memory CSV.
    pub fn read_from<T: std::io::Read>(&self, input: T) -> Result<Vec<Record>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(input);

        let headers = reader.headers()?.clone();
        let mut records = Vec::new();

        for row in reader.records() {
            let row = row?;
            // 短列缺少的欄位不放入 record
            let fields: HashMap<String, String> = headers
                .iter()
                .zip(row.iter())
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect();
            records.push(Record::from(fields));
        }

        Ok(records)
    }
}

impl Default for CsvRecordReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordReader for CsvRecordReader {
    fn read(&self, source: &str) -> Result<Vec<Record>> {
        let path = self.resolve(source);
        tracing::debug!("Reading records from: {}", path.display());

        let file = std::fs::File::open(&path)?;
        let records = self.read_from(file)?;

        tracing::debug!("Read {} records from {}", records.len(), path.display());
        Ok(records)
    }
}
