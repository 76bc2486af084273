//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain: expenses,
//! their identifiers, money amounts, months and monthly budgets.

pub mod budget;
pub mod expense;
pub mod ids;
pub mod money;
pub mod month;

pub use budget::MonthlyBudgets;
pub use expense::{Expense, ExpenseValidationError};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use month::{Month, MonthParseError};
