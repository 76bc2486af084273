//! Expense display formatting
//!
//! Renders the expense list as a fixed-width table with centered columns.

use crate::models::Expense;

const TABLE_WIDTH: usize = 55;

/// Format a single expense as a table row
pub fn format_expense_row(expense: &Expense, date_format: &str) -> String {
    let date = expense.date.format(date_format).to_string();
    format!(
        "{:^4} {:^19} {:^20} {:^10}",
        expense.id.to_string(),
        date,
        truncate(&expense.description, 20),
        expense.amount.to_fixed()
    )
}

/// Format the expense list, or a notice when there is nothing to show
pub fn format_expense_table(expenses: &[Expense], date_format: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:^4} {:^19} {:^20} {:^10}\n",
        "ID", "Date", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(TABLE_WIDTH));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, date_format));
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len - 1).collect();
        format!("{}…", head)
    }
}
