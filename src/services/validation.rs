//! Input validation shared by the services
//!
//! Each check returns the validated value or an `ExpenseError::Validation`
//! carrying the exact message shown to the user.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseId, Money, Month};

pub const INVALID_MONTH: &str = "Invalid month. Please enter a month between 1 and 12.";
pub const INVALID_AMOUNT: &str = "Invalid amount. Please enter a positive number.";
pub const INVALID_NEW_EXPENSE: &str = "Missing description or invalid amount or invalid month.";
pub const INVALID_PARAMETERS: &str = "Missing parameters or invalid parameters.";
pub const TOTAL_OUT_OF_RANGE: &str = "Total expenses are too large to calculate.";

/// A month number in 1-12
pub fn month(number: i64) -> ExpenseResult<Month> {
    Month::new(number).ok_or_else(|| ExpenseError::Validation(INVALID_MONTH.into()))
}

/// A month given as free text; non-numeric input is rejected like an out-of-range one
pub fn month_text(text: &str) -> ExpenseResult<Month> {
    text.parse::<Month>()
        .map_err(|_| ExpenseError::Validation(INVALID_MONTH.into()))
}

/// A budget amount, which may be zero but not negative
pub fn budget_amount(amount: Money) -> ExpenseResult<Money> {
    if amount.is_negative() {
        return Err(ExpenseError::Validation(INVALID_AMOUNT.into()));
    }
    Ok(amount)
}

/// Validated input for a new expense
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub description: String,
    pub amount: Money,
    pub month: Month,
}

/// Check all inputs of a new expense together
pub fn new_expense(
    description: Option<&str>,
    amount: Option<Money>,
    month: Option<i64>,
) -> ExpenseResult<NewExpense> {
    let invalid = || ExpenseError::Validation(INVALID_NEW_EXPENSE.into());

    let description = non_empty(description).ok_or_else(invalid)?;
    let amount = amount.filter(|a| !a.is_negative()).ok_or_else(invalid)?;
    let month = month.and_then(Month::new).ok_or_else(invalid)?;

    Ok(NewExpense {
        description,
        amount,
        month,
    })
}

/// Validated input for revising an existing expense
#[derive(Debug, Clone, PartialEq)]
pub struct Revision {
    pub id: ExpenseId,
    pub description: String,
    pub amount: Money,
}

/// Check all inputs of an expense update together
pub fn revision(
    id: Option<u64>,
    description: Option<&str>,
    amount: Option<Money>,
) -> ExpenseResult<Revision> {
    let invalid = || ExpenseError::Validation(INVALID_PARAMETERS.into());

    let id = id.map(ExpenseId::new).ok_or_else(invalid)?;
    let description = non_empty(description).ok_or_else(invalid)?;
    let amount = amount.filter(|a| !a.is_negative()).ok_or_else(invalid)?;

    Ok(Revision {
        id,
        description,
        amount,
    })
}

/// An expense ID that must be present
pub fn expense_id(id: Option<u64>) -> ExpenseResult<ExpenseId> {
    id.map(ExpenseId::new)
        .ok_or_else(|| ExpenseError::Validation(INVALID_PARAMETERS.into()))
}

fn non_empty(text: Option<&str>) -> Option<String> {
    text.filter(|t| !t.is_empty()).map(str::to_string)
}
