//! Result file output.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use sorter_core::error::{Result, SorterError};
use sorter_core::settings::OutputOptions;
use sorter_core::sorter::SortingReport;
use sorter_core::statistics::AggregationState;
use tracing::{debug, info};

/// Write every non-empty category of `report` to its result file.
///
/// Empty categories produce no file, and an existing file for them is left
/// alone. Returns the paths written, in category order.
pub fn write_report(report: &SortingReport, options: &OutputOptions) -> Result<Vec<PathBuf>> {
    if !options.dir.is_dir() {
        return Err(SorterError::OutputDirMissing(options.dir.clone()));
    }

    let mut written = Vec::new();
    for state in report.non_empty() {
        let path = options.path_for(state.category());
        write_state(state, &path, options.append).map_err(|source| SorterError::FileWrite {
            path: path.clone(),
            source,
        })?;
        info!("Wrote {} {} to {}", state.count(), state.category(), path.display());
        written.push(path);
    }

    debug!("Wrote {} result files", written.len());
    Ok(written)
}

/// Write the lines of one state, each terminated by `\n`.
///
/// Append mode creates the file when it does not exist yet.
fn write_state(state: &AggregationState, path: &Path, append: bool) -> std::io::Result<()> {
    let mut open = OpenOptions::new();
    open.create(true);
    if append {
        open.append(true);
    } else {
        open.write(true).truncate(true);
    }

    let mut out = BufWriter::new(open.open(path)?);
    for line in state.lines() {
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
