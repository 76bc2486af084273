//! Summary service
//!
//! Totals spending overall or for one calendar month.
//!
//! The month filter looks at the calendar month of each expense's timestamp,
//! not at the month the expense was attributed to when it was added. An
//! expense recorded in January against the May budget is counted in January's
//! summary.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Money, Month};
use crate::storage::ExpenseStore;

use super::validation;

/// Service for spending totals
pub struct SummaryService<'a> {
    storage: &'a dyn ExpenseStore,
}

/// Aggregate spending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpendingSummary {
    /// The calendar month filtered on, if any
    pub month: Option<Month>,
    pub total: Money,
    /// Number of expenses included in the total
    pub count: usize,
}

impl<'a> SummaryService<'a> {
    /// Create a new summary service
    pub fn new(storage: &'a dyn ExpenseStore) -> Self {
        Self { storage }
    }

    /// Total spending, optionally restricted to a calendar month given as text
    pub fn summary(&self, month: Option<&str>) -> ExpenseResult<SpendingSummary> {
        let month = month.map(validation::month_text).transpose()?;

        let expenses = self.storage.load_expenses();
        let included: Vec<Money> = expenses
            .iter()
            .filter(|e| month.map_or(true, |m| e.calendar_month() == m))
            .map(|e| e.amount)
            .collect();

        let total = Money::checked_sum(included.iter().copied())
            .ok_or_else(|| ExpenseError::Validation(validation::TOTAL_OUT_OF_RANGE.into()))?;

        Ok(SpendingSummary {
            month,
            total,
            count: included.len(),
        })
    }
}
