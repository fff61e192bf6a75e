mod bootstrap;

use std::process::ExitCode;

use anyhow::Result;
use sorter_core::formatting::format_statistics;
use sorter_core::settings::Settings;
use sorter_data::pipeline;
use sorter_data::reader::FileLines;

fn main() -> ExitCode {
    let settings = Settings::load();

    if let Err(err) = bootstrap::setup_logging(&settings.log_level) {
        eprintln!("line-sorter: warning: logging disabled: {err}");
    }

    match run(&settings) {
        Ok(statistics) => {
            print!("{statistics}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("line-sorter: error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Run one sort and return the statistics block to print.
fn run(settings: &Settings) -> Result<String> {
    tracing::info!("Line sorter v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Output: {}, prefix: {:?}, append: {}",
        settings.output_path.display(),
        settings.prefix,
        settings.append
    );

    let source = FileLines::new(settings.files.iter().cloned());
    let outcome = pipeline::run(&source, &settings.output_options())?;

    Ok(format_statistics(&outcome.report, settings.statistics_mode()))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
