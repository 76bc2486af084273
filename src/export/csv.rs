//! CSV export of expenses

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::ExpenseStore;

fn export_error(e: impl std::fmt::Display) -> ExpenseError {
    ExpenseError::Export(e.to_string())
}

/// Export all expenses to CSV, one row per expense in stored order
pub fn export_expenses_csv<W: Write>(
    storage: &dyn ExpenseStore,
    writer: &mut W,
) -> ExpenseResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["ID", "Date", "Description", "Amount", "Month"])
        .map_err(export_error)?;

    for expense in storage.load_expenses() {
        csv_writer
            .write_record([
                expense.id.to_string(),
                expense.date.format("%Y-%m-%dT%H:%M:%S").to_string(),
                expense.description.clone(),
                expense.amount.to_fixed(),
                expense.month.to_string(),
            ])
            .map_err(export_error)?;
    }

    csv_writer.flush().map_err(export_error)?;
    Ok(())
}
