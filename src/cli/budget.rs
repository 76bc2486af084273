//! Budget CLI command

use clap::Args;

use crate::error::ExpenseResult;
use crate::models::Money;
use crate::services::BudgetService;
use crate::storage::ExpenseStore;

/// Arguments for `budget`
#[derive(Args, Debug)]
pub struct BudgetArgs {
    /// Month to budget (1-12)
    #[arg(short, long, allow_negative_numbers = true)]
    pub month: Option<i64>,

    /// Spending limit for the month
    #[arg(short, long, allow_negative_numbers = true)]
    pub amount: Option<Money>,
}

/// Handle `budget`
pub fn handle_budget_command(storage: &dyn ExpenseStore, args: BudgetArgs) -> ExpenseResult<()> {
    let (Some(month), Some(amount)) = (args.month, args.amount) else {
        println!("Both --month and --amount are required for setting a budget.");
        return Ok(());
    };

    let change = BudgetService::new(storage).set_budget(month, amount)?;
    if let Some(previous) = change.previous {
        log::debug!("Replaced budget of {} for month {}", previous, change.month);
    }

    println!("Budget for month {} set to {}", change.month, change.amount);
    Ok(())
}
