//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, budget checks and aggregation.

pub mod budget;
pub mod expense;
pub mod summary;
pub mod validation;

pub use budget::{BudgetChange, BudgetService};
pub use expense::{AddedExpense, BudgetOverrun, ExpenseService};
pub use summary::{SpendingSummary, SummaryService};
