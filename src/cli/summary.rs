//! Summary CLI command

use clap::Args;

use crate::error::ExpenseResult;
use crate::services::SummaryService;
use crate::storage::ExpenseStore;

/// Arguments for `summary`
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Only count expenses recorded in this calendar month (1-12)
    #[arg(short, long, allow_hyphen_values = true)]
    pub month: Option<String>,
}

/// Handle `summary`
pub fn handle_summary_command(storage: &dyn ExpenseStore, args: SummaryArgs) -> ExpenseResult<()> {
    let summary = SummaryService::new(storage).summary(args.month.as_deref())?;

    match summary.month {
        Some(month) => println!("Total expenses in month {} is: {}", month, summary.total),
        None => println!("Total expenses is: {}", summary.total),
    }
    Ok(())
}
