//! Expense CLI commands
//!
//! Implements add, update, delete and view.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_expense_table;
use crate::error::ExpenseResult;
use crate::models::Money;
use crate::services::ExpenseService;
use crate::storage::ExpenseStore;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// What the money was spent on
    #[arg(short, long)]
    pub description: Option<String>,

    /// Amount spent (e.g., "12.50")
    #[arg(short, long, allow_negative_numbers = true)]
    pub amount: Option<Money>,

    /// Month the expense counts against (1-12)
    #[arg(short, long, allow_negative_numbers = true)]
    pub month: Option<i64>,
}

/// Arguments for `update`
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Expense ID
    #[arg(short, long)]
    pub id: Option<u64>,

    /// New description
    #[arg(short, long)]
    pub description: Option<String>,

    /// New amount
    #[arg(short, long, allow_negative_numbers = true)]
    pub amount: Option<Money>,
}

/// Arguments for `delete`
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Expense ID
    #[arg(short, long)]
    pub id: Option<u64>,
}

/// Handle `add`
pub fn handle_add_command(storage: &dyn ExpenseStore, args: AddArgs) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let added = service.add(args.description.as_deref(), args.amount, args.month)?;

    if let Some(overrun) = added.overrun {
        println!(
            "Warning: Total expenses ({}) exceed the budget for the month ({})",
            overrun.total, overrun.budget
        );
    }
    println!("Expense added successfully (ID: {})", added.expense.id);

    Ok(())
}

/// Handle `update`
pub fn handle_update_command(storage: &dyn ExpenseStore, args: UpdateArgs) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let expense = service.update(args.id, args.description.as_deref(), args.amount)?;

    println!("Updated expense ID {} successfully", expense.id);
    Ok(())
}

/// Handle `delete`
pub fn handle_delete_command(storage: &dyn ExpenseStore, args: DeleteArgs) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let removed = service.delete(args.id)?;

    println!("Deleted expense ID {} successfully", removed.id);
    Ok(())
}

/// Handle `view`
pub fn handle_view_command(storage: &dyn ExpenseStore, settings: &Settings) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let expenses = service.list();

    print!("{}", format_expense_table(&expenses, &settings.date_format));
    Ok(())
}
