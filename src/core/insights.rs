use crate::core::salary::parse_decimal;
use crate::domain::model::{FieldValue, Record, INDUSTRY, JOB_TYPE, MAX_SALARY, MIN_SALARY};
use crate::domain::ports::RecordReader;
use crate::utils::error::{InsightsError, Result};
use std::collections::HashSet;

/// Source-based queries. Every call reads the source afresh through `R`.
pub struct JobInsights<R: RecordReader> {
    reader: R,
}

impl<R: RecordReader> JobInsights<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn read(&self, source: &str) -> Result<Vec<Record>> {
        self.reader.read(source)
    }

    pub fn get_unique_job_types(&self, source: &str) -> Result<HashSet<String>> {
        self.unique_values(source, JOB_TYPE)
    }

    pub fn get_unique_industries(&self, source: &str) -> Result<HashSet<String>> {
        self.unique_values(source, INDUSTRY)
    }

    pub fn get_max_salary(&self, source: &str) -> Result<i64> {
        salaries(&self.reader.read(source)?, MAX_SALARY)
            .max()
            .ok_or_else(|| InsightsError::EmptyResult {
                field: MAX_SALARY.to_string(),
            })
    }

    pub fn get_min_salary(&self, source: &str) -> Result<i64> {
        salaries(&self.reader.read(source)?, MIN_SALARY)
            .min()
            .ok_or_else(|| InsightsError::EmptyResult {
                field: MIN_SALARY.to_string(),
            })
    }

    fn unique_values(&self, source: &str, key: &str) -> Result<HashSet<String>> {
        let records = self.reader.read(source)?;
        let values: HashSet<String> = records
            .iter()
            .filter_map(|record| record.get(key))
            .filter(|value| value.is_truthy())
            .filter_map(FieldValue::as_text)
            .map(str::to_string)
            .collect();

        tracing::debug!(
            "Found {} unique {} values in {} records",
            values.len(),
            key,
            records.len()
        );
        Ok(values)
    }
}

/// Digit-string salaries under `key`; everything else is ignored.
fn salaries<'a>(records: &'a [Record], key: &'a str) -> impl Iterator<Item = i64> + 'a {
    records.iter().filter_map(move |record| {
        let text = record.text(key)?;
        let parsed = parse_decimal(text);
        if parsed.is_none() && !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
            tracing::warn!("Ignoring out-of-range {} value: {}", key, text);
        }
        parsed
    })
}

fn filter_by_field<'a, I>(jobs: I, key: &str, value: &str) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    jobs.into_iter()
        .filter(|job| job.text(key) == Some(value))
        .collect()
}

pub fn filter_by_job_type<'a, I>(jobs: I, job_type: &str) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    filter_by_field(jobs, JOB_TYPE, job_type)
}

pub fn filter_by_industry<'a, I>(jobs: I, industry: &str) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    filter_by_field(jobs, INDUSTRY, industry)
}
