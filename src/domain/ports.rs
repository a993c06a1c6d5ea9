use crate::domain::model::Record;
use crate::utils::error::Result;

/// Source of job records. Called once per source-based query; no caching.
pub trait RecordReader {
    fn read(&self, source: &str) -> Result<Vec<Record>>;
}

/// Fixed record list, ignores `source`. Useful for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReader {
    records: Vec<Record>,
}

impl InMemoryReader {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl RecordReader for InMemoryReader {
    fn read(&self, _source: &str) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }
}
