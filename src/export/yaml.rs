//! YAML snapshot, for reading by eye

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::Snapshot;
use crate::storage::ExpenseStore;

/// Write the snapshot as YAML under a short comment header
pub fn export_snapshot_yaml<W: Write>(storage: &dyn ExpenseStore, writer: &mut W) -> ExpenseResult<()> {
    let snapshot = Snapshot::capture(storage)?;
    let failed = |e: &dyn std::fmt::Display| ExpenseError::Export(e.to_string());

    writeln!(
        writer,
        "# expense {} snapshot, {} expenses, taken {}",
        snapshot.app_version,
        snapshot.totals.expense_count,
        snapshot.exported_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
    .map_err(|e| failed(&e))?;

    serde_yaml::to_writer(writer, &snapshot).map_err(|e| failed(&e))
}
