//! Export CLI command

use clap::Args;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{self, ExportFormat};
use crate::storage::ExpenseStore;

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format: csv, json or yaml
    #[arg(short, long, default_value = "json")]
    pub format: String,

    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle `export`
pub fn handle_export_command(storage: &dyn ExpenseStore, args: ExportArgs) -> ExpenseResult<()> {
    let format: ExportFormat = args.format.parse()?;

    let Some(output) = args.output else {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        return export::export(storage, format, &mut handle);
    };

    let file = File::create(&output).map_err(|e| {
        ExpenseError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    export::export(storage, format, &mut writer)?;
    writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    println!("Exported {} to: {}", format, output.display());
    Ok(())
}
