pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use app::query::{execute, QueryOutput};
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::csv_reader::CsvRecordReader;
pub use config::toml_config::TomlConfig;
pub use core::insights::{filter_by_industry, filter_by_job_type, JobInsights};
pub use core::salary::{
    convert_salaries, filter_by_salary_range, matches_salary_range, salary_range,
};
pub use domain::model::{FieldValue, Record, SalaryRange};
pub use domain::ports::{InMemoryReader, RecordReader};
pub use utils::error::{InsightsError, Result};
