// src/io/output.rs - Rendering drill results as plain text, JSON or YAML

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::infra::errors::{DrillError, Result};
use crate::tasks::registry::{self, TaskInfo};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
    Yaml,
}

/// The single value a drill produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Bool(bool),
    Int(i128),
    Text(String),
    List(Vec<i128>),
    Rows(Vec<Vec<i128>>),
    Counts(BTreeMap<String, usize>),
    Tasks(Vec<TaskInfo>),
    Missing,
}

impl From<Option<i64>> for Output {
    fn from(value: Option<i64>) -> Self {
        match value {
            Some(v) => Output::Int(v.into()),
            None => Output::Missing,
        }
    }
}

impl Output {
    pub fn list<T: Copy + Into<i128>>(values: &[T]) -> Self {
        Output::List(values.iter().map(|&v| v.into()).collect())
    }

    pub fn rows<T: Copy + Into<i128>>(rows: &[Vec<T>]) -> Self {
        Output::Rows(
            rows.iter()
                .map(|row| row.iter().map(|&v| v.into()).collect())
                .collect(),
        )
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Plain => Ok(self.to_plain()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Yaml => serde_yml::to_string(self)
                .map(|s| s.trim_end().to_string())
                .map_err(|e| DrillError::Other(e.into())),
        }
    }

    fn to_plain(&self) -> String {
        match self {
            Output::Bool(b) => b.to_string(),
            Output::Int(n) => n.to_string(),
            Output::Text(s) => s.clone(),
            Output::List(values) => join(values),
            Output::Rows(rows) => rows.iter().map(|r| join(r)).collect::<Vec<_>>().join("\n"),
            Output::Counts(counts) => counts
                .iter()
                .map(|(key, count)| format!("{key}: {count}"))
                .collect::<Vec<_>>()
                .join("\n"),
            Output::Tasks(tasks) => registry::render_table(tasks),
            Output::Missing => "none".into(),
        }
    }
}

fn join(values: &[i128]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_scalars() {
        assert_eq!(Output::Bool(true).render(OutputFormat::Plain).unwrap(), "true");
        assert_eq!(Output::Int(-42).render(OutputFormat::Plain).unwrap(), "-42");
        assert_eq!(Output::Missing.render(OutputFormat::Plain).unwrap(), "none");
    }

    #[test]
    fn test_plain_rows() {
        let out = Output::rows(&[vec![1i64, 2], vec![], vec![3]]);
        assert_eq!(out.render(OutputFormat::Plain).unwrap(), "1 2\n\n3");
    }

    #[test]
    fn test_plain_counts_sorted() {
        let mut counts = BTreeMap::new();
        counts.insert("pear".to_string(), 1);
        counts.insert("apple".to_string(), 3);
        insta::assert_snapshot!(out_plain(Output::Counts(counts)), @r"
        apple: 3
        pear: 1
        ");
    }

    fn out_plain(out: Output) -> String {
        out.render(OutputFormat::Plain).unwrap()
    }

    #[test]
    fn test_json_list() {
        let out = Output::list(&[1u64, 2, 3]);
        let json: serde_json::Value =
            serde_json::from_str(&out.render(OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_json_missing_is_null() {
        assert_eq!(Output::Missing.render(OutputFormat::Json).unwrap(), "null");
    }

    #[test]
    fn test_yaml_scalar() {
        assert_eq!(Output::Int(7).render(OutputFormat::Yaml).unwrap(), "7");
    }

    #[test]
    fn test_tasks_json() {
        let out = Output::Tasks(registry::TASKS[..2].to_vec());
        let json: serde_json::Value =
            serde_json::from_str(&out.render(OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json[0]["name"], "prime");
        assert_eq!(json[0]["family"], "numbers");
        assert_eq!(json.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Output::from(Some(5)), Output::Int(5));
        assert_eq!(Output::from(None), Output::Missing);
    }
}
