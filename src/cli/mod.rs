//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod export;
pub mod summary;

pub use budget::{handle_budget_command, BudgetArgs};
pub use expense::{
    handle_add_command, handle_delete_command, handle_update_command, handle_view_command,
    AddArgs, DeleteArgs, UpdateArgs,
};
pub use export::{handle_export_command, ExportArgs};
pub use summary::{handle_summary_command, SummaryArgs};

use crate::error::ExpenseResult;

/// Print validation and not-found outcomes instead of failing the command
///
/// These end the command normally. Any other error is passed on.
pub fn report_outcome(result: ExpenseResult<()>) -> ExpenseResult<()> {
    match result {
        Err(e) if e.is_user_facing() => {
            log::debug!("Command ended with: {}", e);
            println!("{}", e);
            Ok(())
        }
        other => other,
    }
}
