//! Expense service
//!
//! Adds, revises, deletes and lists expenses. Adding an expense also checks the
//! attribution month's running total against that month's budget.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, Money, Month};
use crate::storage::ExpenseStore;

use super::budget::BudgetService;
use super::validation;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a dyn ExpenseStore,
}

/// Spending in a month went past its budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetOverrun {
    pub month: Month,
    pub total: Money,
    pub budget: Money,
}

/// Result of adding an expense
#[derive(Debug, Clone, PartialEq)]
pub struct AddedExpense {
    pub expense: Expense,
    /// Set when the month's total now exceeds its budget
    pub overrun: Option<BudgetOverrun>,
}

/// Sum of amounts attributed to `month`
pub fn total_for_month(expenses: &[Expense], month: Month) -> ExpenseResult<Money> {
    Money::checked_sum(
        expenses
            .iter()
            .filter(|e| e.month == month)
            .map(|e| e.amount),
    )
    .ok_or_else(|| ExpenseError::Validation(validation::TOTAL_OUT_OF_RANGE.into()))
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a dyn ExpenseStore) -> Self {
        Self { storage }
    }

    /// Record a new expense
    ///
    /// The expense is saved even when it pushes the month over budget; the
    /// overrun is returned for the caller to warn about. A month without a
    /// budget counts as a budget of zero.
    pub fn add(
        &self,
        description: Option<&str>,
        amount: Option<Money>,
        month: Option<i64>,
    ) -> ExpenseResult<AddedExpense> {
        let input = validation::new_expense(description, amount, month)?;

        let mut expenses = self.storage.load_expenses();
        let id = ExpenseId::next_after(expenses.iter().map(|e| e.id));
        let expense = Expense::new(id, input.description, input.amount, input.month);
        expenses.push(expense.clone());

        // Already validated above; kept so a budget lookup failure aborts before saving
        let budget = BudgetService::new(self.storage).get_budget(input.month.number() as i64)?;

        let total = total_for_month(&expenses, input.month)?;
        let overrun = (total > budget).then_some(BudgetOverrun {
            month: input.month,
            total,
            budget,
        });
        if overrun.is_some() {
            log::info!("Month {} is over budget: {} > {}", input.month, total, budget);
        }

        self.storage.save_expenses(&expenses);

        Ok(AddedExpense { expense, overrun })
    }

    /// Replace an expense's description and amount, refreshing its timestamp
    pub fn update(
        &self,
        id: Option<u64>,
        description: Option<&str>,
        amount: Option<Money>,
    ) -> ExpenseResult<Expense> {
        let input = validation::revision(id, description, amount)?;

        let mut expenses = self.storage.load_expenses();
        let expense = expenses
            .iter_mut()
            .find(|e| e.id == input.id)
            .ok_or_else(|| ExpenseError::ExpenseNotFound(input.id))?;

        expense.revise(input.description, input.amount);
        let updated = expense.clone();

        self.storage.save_expenses(&expenses);
        Ok(updated)
    }

    /// Remove an expense
    pub fn delete(&self, id: Option<u64>) -> ExpenseResult<Expense> {
        let id = validation::expense_id(id)?;

        let mut expenses = self.storage.load_expenses();
        let position = expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ExpenseError::ExpenseNotFound(id))?;
        let removed = expenses.remove(position);

        self.storage.save_expenses(&expenses);
        Ok(removed)
    }

    /// All expenses in stored order
    pub fn list(&self) -> Vec<Expense> {
        self.storage.load_expenses()
    }
}
