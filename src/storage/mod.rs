//! Storage layer for the expense tracker
//!
//! Whole-collection JSON persistence. Every operation loads the collections it
//! needs from disk and writes them back in full; nothing is cached between
//! calls.
//!
//! Services talk to storage through the [`ExpenseStore`] trait. [`Storage`] is
//! the file-backed implementation: it absorbs load and save failures, reports
//! them alongside the command's normal output, and falls back to empty
//! collections.

pub mod json_file;

pub use json_file::JsonFile;

use crate::config::paths::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, MonthlyBudgets};

/// Persistence interface used by the services
pub trait ExpenseStore {
    /// All stored expenses in stored order; empty when nothing can be read
    fn load_expenses(&self) -> Vec<Expense>;

    /// Overwrite the stored expenses. Failures are reported, not returned.
    fn save_expenses(&self, expenses: &[Expense]);

    /// The stored budget table; empty when nothing can be read
    fn load_budget(&self) -> MonthlyBudgets;

    /// Overwrite the stored budget table. Failures are reported, not returned.
    fn save_budget(&self, budgets: &MonthlyBudgets);
}

/// File-backed storage rooted in a data directory
pub struct Storage {
    pub expenses: JsonFile<Vec<Expense>>,
    pub budget: JsonFile<MonthlyBudgets>,
}

impl Storage {
    /// Create a new Storage instance rooted at `paths`
    pub fn new(paths: &ExpensePaths) -> ExpenseResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: JsonFile::new(paths.expenses_file()),
            budget: JsonFile::new(paths.budget_file()),
        })
    }
}

fn report(err: &ExpenseError) {
    log::warn!("{}", err);
    println!("Error: {}", err);
}

impl ExpenseStore for Storage {
    fn load_expenses(&self) -> Vec<Expense> {
        let expenses = self.expenses.load().unwrap_or_else(|e| {
            report(&e);
            Vec::new()
        });
        for expense in &expenses {
            if let Err(e) = expense.validate() {
                log::warn!("Stored expense {} is invalid: {}", expense.id, e);
            }
        }
        expenses
    }

    fn save_expenses(&self, expenses: &[Expense]) {
        match self.expenses.save(expenses) {
            Ok(()) => log::debug!(
                "Saved {} expenses to {}",
                expenses.len(),
                self.expenses.path().display()
            ),
            Err(e) => report(&e),
        }
    }

    fn load_budget(&self) -> MonthlyBudgets {
        self.budget.load().unwrap_or_else(|e| {
            report(&e);
            MonthlyBudgets::new()
        })
    }

    fn save_budget(&self, budgets: &MonthlyBudgets) {
        match self.budget.save(budgets) {
            Ok(()) => log::debug!("Saved budget to {}", self.budget.path().display()),
            Err(e) => report(&e),
        }
    }
}
