//! Display preferences read from `config.json` in the data directory

use std::fs;
use std::io::ErrorKind;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};

/// strftime pattern for the Date column of `view`
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Keys missing from the file take their default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub schema_version: u32,
    pub date_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: 1,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Settings {
    /// Read the settings file, falling back to defaults when there is none
    ///
    /// Nothing is written here; `config --init` is the only thing that
    /// creates the file.
    pub fn load_or_create(paths: &ExpensePaths) -> ExpenseResult<Self> {
        let path = paths.settings_file();
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(ExpenseError::Io(format!("Failed to read {}: {}", path.display(), e)))
            }
        };

        let settings: Self = serde_json::from_str(&text)
            .map_err(|e| ExpenseError::Config(format!("{} is not valid: {}", path.display(), e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// A date format chrono cannot render would only fail later, inside `view`
    pub fn validate(&self) -> ExpenseResult<()> {
        let broken = StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error));
        if broken {
            return Err(ExpenseError::Config(format!(
                "Invalid date_format: {}",
                self.date_format
            )));
        }
        Ok(())
    }

    pub fn save(&self, paths: &ExpensePaths) -> ExpenseResult<()> {
        paths.ensure_directories()?;

        let path = paths.settings_file();
        let text = serde_json::to_string_pretty(self)
            .map_err(|e| ExpenseError::Config(e.to_string()))?;
        fs::write(&path, text)
            .map_err(|e| ExpenseError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }
}
