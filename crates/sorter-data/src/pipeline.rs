//! Read → sort → write, end to end.

use std::path::PathBuf;

use sorter_core::error::Result;
use sorter_core::settings::OutputOptions;
use sorter_core::sorter::{LineSorter, SortingReport};
use tracing::info;

use crate::reader::LineSource;
use crate::writer::write_report;

/// Result of one complete run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Finalized statistics for every category.
    pub report: SortingReport,
    /// Result files written, in category order.
    pub written: Vec<PathBuf>,
}

/// Load all lines from `source`, classify them and write the result files.
///
/// Nothing is written when reading fails, so a missing input file never
/// leaves partial output behind.
pub fn run(source: &impl LineSource, options: &OutputOptions) -> Result<RunOutcome> {
    let lines = source.read_lines()?;
    info!("Ingesting {} lines", lines.len());

    let report = LineSorter::sort(lines);
    let written = write_report(&report, options)?;

    Ok(RunOutcome { report, written })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::{FileLines, MemoryLines};
    use sorter_core::error::SorterError;
    use sorter_core::models::Category;
    use tempfile::TempDir;

    fn options(dir: &TempDir) -> OutputOptions {
        OutputOptions {
            dir: dir.path().to_path_buf(),
            prefix: String::new(),
            append: false,
        }
    }

    #[test]
    fn test_run_from_files() {
        let dir = TempDir::new().unwrap();
        let in1 = dir.path().join("in1.txt");
        let in2 = dir.path().join("in2.txt");
        std::fs::write(&in1, "Lorem ipsum\n45\n1.528535047E-25\n").unwrap();
        std::fs::write(&in2, "100500\n-0.001\nsome text\n").unwrap();

        let outcome = run(&FileLines::new([in1, in2]), &options(&dir)).unwrap();

        assert_eq!(outcome.report.get(Category::Integer).lines(), ["45", "100500"]);
        assert_eq!(
            outcome.report.get(Category::Float).lines(),
            ["1.528535047E-25", "-0.001"]
        );
        assert_eq!(
            outcome.report.get(Category::String).lines(),
            ["Lorem ipsum", "some text"]
        );
        assert_eq!(outcome.written.len(), 3);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("integers.txt")).unwrap(),
            "45\n100500\n"
        );
    }

    #[test]
    fn test_run_empty_input_writes_nothing() {
        let dir = TempDir::new().unwrap();

        let outcome = run(&MemoryLines::default(), &options(&dir)).unwrap();

        assert_eq!(outcome.report.total_lines(), 0);
        assert!(outcome.written.is_empty());
    }

    #[test]
    fn test_run_missing_input_writes_nothing() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("ok.txt"), "1\n").unwrap();
        let source = FileLines::new([dir.path().join("ok.txt"), dir.path().join("missing.txt")]);

        let err = run(&source, &options(&dir)).unwrap_err();

        assert!(matches!(err, SorterError::FileRead { .. }));
        assert!(!dir.path().join("integers.txt").exists());
    }
}
