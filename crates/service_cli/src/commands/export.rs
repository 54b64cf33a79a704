//! Export command implementation
//!
//! Writes the 2025-2035 ledger to CSV.

use super::{Context, RateOverrides};
use crate::export::{default_file_name, write_ledger_csv};
use crate::Result;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

/// Run the export command, returning the path written.
///
/// Without `output` the file is named after the rates and written to the
/// current directory.
pub fn run(ctx: &Context, overrides: RateOverrides, output: Option<&Path>) -> Result<PathBuf> {
    let params = ctx.parameters(overrides)?;
    let ledger = ctx.engine().compute(&params)?;

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(default_file_name(&params)),
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(&path)?;
    write_ledger_csv(BufWriter::new(file), &ledger)?;

    info!(
        path = %path.display(),
        rows = ledger.projection().len(),
        "Ledger exported"
    );
    Ok(path)
}
