use crate::domain::model::{FieldValue, Record, SalaryRange, MAX_SALARY, MIN_SALARY};
use crate::utils::error::{InsightsError, Result};

/// Non-negative ASCII digit string, parsed. Other Unicode digits and overflow yield `None`.
pub fn parse_decimal(value: &str) -> Option<i64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Copy of `record` with digit-string salary bounds turned into integers.
///
/// Readers produce text; the range check expects integers. Anything that
/// is not a plain digit string is left as-is so validation can report it.
pub fn convert_salaries(record: &Record) -> Record {
    let mut converted = record.clone();
    for key in [MIN_SALARY, MAX_SALARY] {
        if let Some(FieldValue::Text(text)) = converted.data.get(key) {
            if let Some(n) = parse_decimal(text) {
                converted.data.insert(key.to_string(), FieldValue::Integer(n));
            }
        }
    }
    converted
}

impl Record {
    pub fn with_salaries_converted(&self) -> Record {
        convert_salaries(self)
    }
}

fn integer_bound(record: &Record, key: &str) -> Result<i64> {
    match record.get(key) {
        Some(FieldValue::Integer(n)) => Ok(*n),
        Some(other) => Err(InsightsError::InvalidType {
            field: key.to_string(),
            value: other.to_string(),
        }),
        None => Err(InsightsError::MissingField {
            field: key.to_string(),
        }),
    }
}

/// Validated salary bounds of `record`.
pub fn salary_range(record: &Record) -> Result<SalaryRange> {
    for key in [MIN_SALARY, MAX_SALARY] {
        if record.get(key).is_none() {
            return Err(InsightsError::MissingField {
                field: key.to_string(),
            });
        }
    }

    let min = integer_bound(record, MIN_SALARY)?;
    let max = integer_bound(record, MAX_SALARY)?;

    if min > max {
        return Err(InsightsError::InvalidRange { min, max });
    }

    Ok(SalaryRange::new_unchecked(min, max))
}

/// Whether `salary` lies within the record's closed salary range.
///
/// Checks run in this order, each with its own error:
/// missing bound (`MissingField`), non-integer bound (`InvalidType`),
/// `min_salary > max_salary` (`InvalidRange`), non-integer salary (`InvalidType`).
pub fn matches_salary_range(record: &Record, salary: impl Into<FieldValue>) -> Result<bool> {
    let range = salary_range(record)?;

    let salary = match salary.into() {
        FieldValue::Integer(n) => n,
        other => {
            return Err(InsightsError::InvalidType {
                field: "salary".to_string(),
                value: other.to_string(),
            })
        }
    };

    Ok(range.contains(salary))
}

/// Records whose salary range contains `salary`, in input order.
/// Records that fail validation are skipped, never reported.
pub fn filter_by_salary_range<'a, I>(jobs: I, salary: impl Into<FieldValue>) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    let salary = salary.into();
    jobs.into_iter()
        .filter(|job| match matches_salary_range(job, salary.clone()) {
            Ok(matched) => matched,
            Err(e) => {
                tracing::debug!("Skipping record in salary filter: {}", e);
                false
            }
        })
        .collect()
}
