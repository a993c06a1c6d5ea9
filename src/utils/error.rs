use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsightsError {
    #[error("Missing field: {field}")]
    MissingField { field: String },

    #[error("Invalid type for {field}: expected integer, got {value}")]
    InvalidType { field: String, value: String },

    #[error("Invalid salary range: min_salary {min} is greater than max_salary {max}")]
    InvalidRange { min: i64, max: i64 },

    #[error("No qualifying records for {field}")]
    EmptyResult { field: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Query,
    Source,
}

impl InsightsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            InsightsError::ConfigError { .. } | InsightsError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
            InsightsError::MissingField { .. }
            | InsightsError::InvalidType { .. }
            | InsightsError::InvalidRange { .. }
            | InsightsError::EmptyResult { .. } => ErrorCategory::Query,
            InsightsError::Io(_) | InsightsError::Csv(_) | InsightsError::Serialization(_) => {
                ErrorCategory::Source
            }
        }
    }

    /// CLI 結束碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Query => 2,
            ErrorCategory::Source => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            InsightsError::EmptyResult { field } => {
                format!("No record has a numeric '{}' value", field)
            }
            InsightsError::Io(e) => format!("Could not read the data source: {}", e),
            InsightsError::Csv(e) => format!("The data source is not valid CSV: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            InsightsError::MissingField { .. } => {
                "Make sure every record carries min_salary and max_salary"
            }
            InsightsError::InvalidType { .. } => "Salaries must be whole, non-negative numbers",
            InsightsError::InvalidRange { .. } => {
                "Check that min_salary is not greater than max_salary"
            }
            InsightsError::EmptyResult { .. } => "Check the salary columns of the data source",
            InsightsError::Io(_) => "Check that the source path exists and is readable",
            InsightsError::Csv(_) => "Check the CSV header row and the delimiter setting",
            InsightsError::Serialization(_) => "Try the text output format instead",
            InsightsError::ConfigError { .. } | InsightsError::InvalidConfigValue { .. } => {
                "Review the configuration file and command-line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, InsightsError>;
