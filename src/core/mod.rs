pub mod insights;
pub mod salary;

pub use crate::domain::model::{FieldValue, Record, SalaryRange};
pub use crate::domain::ports::RecordReader;
pub use crate::utils::error::Result;
