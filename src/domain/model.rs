use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub const JOB_TYPE: &str = "job_type";
pub const INDUSTRY: &str = "industry";
pub const MIN_SALARY: &str = "min_salary";
pub const MAX_SALARY: &str = "max_salary";

/// A single field value. Readers only produce `Text`; `Integer` appears after
/// salary conversion or when records are built by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Integer(_) => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }

    /// 空字串視為 falsy
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Integer(n) => *n != 0,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: HashMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for fixtures.
    pub fn with(mut self, key: &str, value: impl Into<FieldValue>) -> Self {
        self.data.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.data.get(key)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_text)
    }
}

impl From<HashMap<String, String>> for Record {
    fn from(row: HashMap<String, String>) -> Self {
        Self {
            data: row
                .into_iter()
                .map(|(key, value)| (key, FieldValue::Text(value)))
                .collect(),
        }
    }
}

/// Closed interval `[min, max]` with `min <= max`, only built by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryRange {
    min: i64,
    max: i64,
}

impl SalaryRange {
    pub(crate) fn new_unchecked(min: i64, max: i64) -> Self {
        debug_assert!(min <= max);
        Self { min, max }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, salary: i64) -> bool {
        self.min <= salary && salary <= self.max
    }
}
