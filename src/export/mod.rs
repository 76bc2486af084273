//! Export module for the expense tracker
//!
//! Writes all stored data in one of three formats:
//! - CSV: expenses only, spreadsheet-compatible
//! - JSON: snapshot of expenses, budgets and monthly totals
//! - YAML: the same snapshot with a comment header

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use json::{export_snapshot_json, Snapshot, SpendingTotals, SNAPSHOT_VERSION};
pub use yaml::export_snapshot_yaml;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::ExpenseStore;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl FromStr for ExportFormat {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(ExpenseError::Validation(format!(
                "Unknown export format '{}'. Use csv, json or yaml.",
                other
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Export everything in `format` to `writer`
pub fn export<W: Write>(
    storage: &dyn ExpenseStore,
    format: ExportFormat,
    writer: &mut W,
) -> ExpenseResult<()> {
    match format {
        ExportFormat::Csv => export_expenses_csv(storage, writer),
        ExportFormat::Json => export_snapshot_json(storage, writer),
        ExportFormat::Yaml => export_snapshot_yaml(storage, writer),
    }
}
