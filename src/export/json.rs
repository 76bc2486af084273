//! JSON snapshot of everything in storage
//!
//! A snapshot holds the expenses and budgets as stored, plus totals per
//! attribution month so the file can be checked against the budgets without
//! re-adding the expenses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money, Month, MonthlyBudgets};
use crate::services::validation::TOTAL_OUT_OF_RANGE;
use crate::storage::ExpenseStore;

/// Layout version of [`Snapshot`]
pub const SNAPSHOT_VERSION: u32 = 1;

/// All stored data at one point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub schema_version: u32,
    pub exported_at: DateTime<Utc>,
    /// Version of the tool that wrote the snapshot
    pub app_version: String,
    pub expenses: Vec<Expense>,
    pub budget: MonthlyBudgets,
    pub totals: SpendingTotals,
}

/// Aggregates derived from the expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingTotals {
    pub expense_count: usize,
    pub total_spent: Money,
    /// Spending per attribution month; months without expenses are omitted
    pub by_month: BTreeMap<Month, Money>,
}

impl SpendingTotals {
    fn of(expenses: &[Expense]) -> ExpenseResult<Self> {
        let too_large = || ExpenseError::Export(TOTAL_OUT_OF_RANGE.into());

        let mut by_month: BTreeMap<Month, Money> = BTreeMap::new();
        for expense in expenses {
            let slot = by_month.entry(expense.month).or_default();
            *slot = slot.checked_add(expense.amount).ok_or_else(too_large)?;
        }
        let total_spent =
            Money::checked_sum(by_month.values().copied()).ok_or_else(too_large)?;

        Ok(Self {
            expense_count: expenses.len(),
            total_spent,
            by_month,
        })
    }
}

impl Snapshot {
    /// Read the current expenses and budgets
    pub fn capture(storage: &dyn ExpenseStore) -> ExpenseResult<Self> {
        let expenses = storage.load_expenses();
        let totals = SpendingTotals::of(&expenses)?;

        Ok(Self {
            schema_version: SNAPSHOT_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses,
            budget: storage.load_budget(),
            totals,
        })
    }

    /// Check a snapshot read back from disk
    pub fn verify(&self) -> ExpenseResult<()> {
        if self.schema_version != SNAPSHOT_VERSION {
            return Err(ExpenseError::Export(format!(
                "Unsupported snapshot version {} (expected {})",
                self.schema_version, SNAPSHOT_VERSION
            )));
        }
        if SpendingTotals::of(&self.expenses)? != self.totals {
            return Err(ExpenseError::Export(
                "Snapshot totals do not match its expenses".into(),
            ));
        }
        Ok(())
    }
}

/// Write a pretty-printed snapshot
pub fn export_snapshot_json<W: Write>(storage: &dyn ExpenseStore, writer: &mut W) -> ExpenseResult<()> {
    let snapshot = Snapshot::capture(storage)?;

    serde_json::to_writer_pretty(&mut *writer, &snapshot)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::models::ExpenseId;
    use crate::storage::Storage;
    use tempfile::TempDir;

    fn seeded_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(&ExpensePaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let may = Month::new(5).unwrap();
        let june = Month::new(6).unwrap();
        storage.save_expenses(&[
            Expense::new(ExpenseId::new(1), "Groceries", Money::from_cents(5025), may),
            Expense::new(ExpenseId::new(2), "Gas", Money::from_cents(3000), may),
            Expense::new(ExpenseId::new(3), "Concert", Money::from_cents(12000), june),
        ]);
        let mut budget = MonthlyBudgets::new();
        budget.set(may, Money::from_cents(100_000));
        storage.save_budget(&budget);
        (temp_dir, storage)
    }

    #[test]
    fn test_snapshot_reads_back() {
        let (_temp_dir, storage) = seeded_storage();

        let mut output = Vec::new();
        export_snapshot_json(&storage, &mut output).unwrap();

        let snapshot: Snapshot = serde_json::from_slice(&output).unwrap();
        snapshot.verify().unwrap();
        assert_eq!(snapshot.expenses, storage.load_expenses());
        assert_eq!(snapshot.budget, storage.load_budget());
    }

    #[test]
    fn test_totals_per_attribution_month() {
        let (_temp_dir, storage) = seeded_storage();
        let totals = Snapshot::capture(&storage).unwrap().totals;

        assert_eq!(totals.expense_count, 3);
        assert_eq!(totals.total_spent, Money::from_cents(20025));
        assert_eq!(totals.by_month[&Month::new(5).unwrap()], Money::from_cents(8025));
        assert_eq!(totals.by_month[&Month::new(6).unwrap()], Money::from_cents(12000));
        assert!(!totals.by_month.contains_key(&Month::new(7).unwrap()));
    }

    #[test]
    fn test_verify_catches_edited_expenses() {
        let (_temp_dir, storage) = seeded_storage();
        let mut snapshot = Snapshot::capture(&storage).unwrap();
        snapshot.expenses.pop();
        assert!(snapshot.verify().is_err());
    }
}
