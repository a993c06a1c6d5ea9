use crate::config::{Command, OutputFormat, Settings};
use crate::core::insights::{filter_by_industry, filter_by_job_type, JobInsights};
use crate::core::salary::{convert_salaries, filter_by_salary_range, matches_salary_range};
use crate::domain::model::{FieldValue, Record};
use crate::domain::ports::RecordReader;
use crate::utils::error::Result;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Result of one CLI command, before formatting.
#[derive(Debug)]
pub enum QueryOutput {
    /// Sorted distinct values.
    Values(Vec<String>),
    Number(i64),
    Records(Vec<Record>),
    Matches(Vec<MatchRow>),
}

/// `match` outcome for the record at `index` in source order.
#[derive(Debug)]
pub struct MatchRow {
    pub index: usize,
    pub outcome: Result<bool>,
}

pub fn execute(command: &Command, settings: &Settings) -> Result<QueryOutput> {
    tracing::info!("📁 Data source: {}", settings.source);
    run_query(&JobInsights::new(settings.reader()), &settings.source, command)
}

pub fn run_query<R: RecordReader>(
    insights: &JobInsights<R>,
    source: &str,
    command: &Command,
) -> Result<QueryOutput> {
    match command {
        Command::JobTypes => Ok(sorted_values(insights.get_unique_job_types(source)?)),
        Command::Industries => Ok(sorted_values(insights.get_unique_industries(source)?)),
        Command::MaxSalary => Ok(QueryOutput::Number(insights.get_max_salary(source)?)),
        Command::MinSalary => Ok(QueryOutput::Number(insights.get_min_salary(source)?)),
        Command::Filter {
            job_type,
            industry,
            salary,
        } => {
            let records: Vec<Record> = insights.read(source)?.iter().map(convert_salaries).collect();

            // 順序：job type → industry → salary
            let mut selected: Vec<&Record> = records.iter().collect();
            if let Some(job_type) = job_type {
                selected = filter_by_job_type(selected, job_type);
            }
            if let Some(industry) = industry {
                selected = filter_by_industry(selected, industry);
            }
            if let Some(salary) = salary {
                let salary = salary_arg(salary);
                if salary.as_integer().is_none() {
                    tracing::warn!("Salary {} is not an integer; no record can match", salary);
                }
                selected = filter_by_salary_range(selected, salary);
            }

            tracing::info!("✅ {} of {} records matched", selected.len(), records.len());
            Ok(QueryOutput::Records(selected.into_iter().cloned().collect()))
        }
        Command::Match { salary } => {
            let salary = salary_arg(salary);
            let rows = insights
                .read(source)?
                .iter()
                .enumerate()
                .map(|(index, record)| MatchRow {
                    index,
                    outcome: matches_salary_range(&convert_salaries(record), salary.clone()),
                })
                .collect();
            Ok(QueryOutput::Matches(rows))
        }
    }
}

/// 可解析為整數的參數轉為 Integer，其餘保留文字交給驗證處理
pub fn salary_arg(value: &str) -> FieldValue {
    value
        .parse::<i64>()
        .map(FieldValue::Integer)
        .unwrap_or_else(|_| FieldValue::Text(value.to_string()))
}

fn sorted_values(values: impl IntoIterator<Item = String>) -> QueryOutput {
    let mut values: Vec<String> = values.into_iter().collect();
    values.sort();
    QueryOutput::Values(values)
}

impl QueryOutput {
    /// Every line, including the last, ends with a newline.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let mut out = String::new();
        match (self, format) {
            (QueryOutput::Values(values), OutputFormat::Text) => {
                values.iter().for_each(|v| {
                    let _ = writeln!(out, "{}", v);
                });
            }
            (QueryOutput::Number(n), _) => {
                let _ = writeln!(out, "{}", n);
            }
            (QueryOutput::Records(records), OutputFormat::Text) => {
                for record in records {
                    let sorted: BTreeMap<_, _> = record.data.iter().collect();
                    let line: Vec<String> = sorted
                        .into_iter()
                        .map(|(key, value)| match value {
                            FieldValue::Integer(n) => format!("{}={}", key, n),
                            FieldValue::Text(s) => format!("{}={}", key, s),
                        })
                        .collect();
                    let _ = writeln!(out, "{}", line.join(" "));
                }
            }
            (QueryOutput::Matches(rows), OutputFormat::Text) => {
                for row in rows {
                    let _ = match &row.outcome {
                        Ok(matched) => writeln!(out, "{}\t{}", row.index, matched),
                        Err(e) => writeln!(out, "{}\terror: {}", row.index, e),
                    };
                }
            }
            (QueryOutput::Values(values), OutputFormat::Json) => {
                let _ = writeln!(out, "{}", serde_json::to_string_pretty(values)?);
            }
            (QueryOutput::Records(records), OutputFormat::Json) => {
                let _ = writeln!(out, "{}", serde_json::to_string_pretty(records)?);
            }
            (QueryOutput::Matches(rows), OutputFormat::Json) => {
                let rows: Vec<serde_json::Value> = rows
                    .iter()
                    .map(|row| match &row.outcome {
                        Ok(matched) => serde_json::json!({ "index": row.index, "matches": matched }),
                        Err(e) => serde_json::json!({ "index": row.index, "error": e.to_string() }),
                    })
                    .collect();
                let _ = writeln!(out, "{}", serde_json::to_string_pretty(&rows)?);
            }
        }
        Ok(out)
    }
}
