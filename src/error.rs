//! Error type shared by every layer of the tracker
//!
//! Two kinds of error end a command normally: input the user got wrong
//! (`Validation`) and an id that matches no expense (`ExpenseNotFound`).
//! Their text is printed as the command's output. Everything else is a fault
//! that makes the binary exit with status 1.

use thiserror::Error;

use crate::models::ExpenseId;

#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Input rejected before anything was loaded or saved; shown verbatim
    #[error("{0}")]
    Validation(String),

    #[error("Expense with ID {0} not found")]
    ExpenseNotFound(ExpenseId),

    /// Unreadable or invalid settings, or an unusable data directory
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    /// Reading or writing `expenses.json` / `budget.json`
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ExpenseNotFound(_))
    }

    /// Printed as command output, exit status 0
    pub fn is_user_facing(&self) -> bool {
        self.is_validation() || self.is_not_found()
    }
}

pub type ExpenseResult<T> = Result<T, ExpenseError>;
