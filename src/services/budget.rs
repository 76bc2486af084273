//! Budget service
//!
//! Sets and reads the monthly spending ceiling.

use crate::error::ExpenseResult;
use crate::models::{Money, Month};
use crate::storage::ExpenseStore;

use super::validation;

/// Service for monthly budget management
pub struct BudgetService<'a> {
    storage: &'a dyn ExpenseStore,
}

/// Result of setting a budget
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetChange {
    pub month: Month,
    pub amount: Money,
    /// The budget that was replaced, if the month had one
    pub previous: Option<Money>,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a dyn ExpenseStore) -> Self {
        Self { storage }
    }

    /// Set the budget for a month, overwriting any previous value
    pub fn set_budget(&self, month: i64, amount: Money) -> ExpenseResult<BudgetChange> {
        let month = validation::month(month)?;
        let amount = validation::budget_amount(amount)?;

        let mut budgets = self.storage.load_budget();
        let previous = budgets.set(month, amount);
        self.storage.save_budget(&budgets);

        Ok(BudgetChange {
            month,
            amount,
            previous,
        })
    }

    /// Get the budget for a month; a month without a budget reads as zero
    pub fn get_budget(&self, month: i64) -> ExpenseResult<Money> {
        let month = validation::month(month)?;
        Ok(self.storage.load_budget().get_or_zero(month))
    }
}
