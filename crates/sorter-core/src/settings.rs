use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::models::{Category, StatisticsMode};

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Sort lines of text files into integers, floats and strings
#[derive(Parser, Debug, Clone)]
#[command(
    name = "line-sorter",
    about = "Sort lines of text files into integers, floats and strings",
    version
)]
pub struct Settings {
    /// Input files, read in the order given
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Directory the result files are written to
    #[arg(short = 'o', long = "output", value_name = "DIR", default_value = "./")]
    pub output_path: PathBuf,

    /// Prefix prepended to every result file name
    #[arg(short = 'p', long, default_value_t = String::new())]
    pub prefix: String,

    /// Append to existing result files instead of overwriting them
    #[arg(short = 'a', long)]
    pub append: bool,

    /// Print short statistics (counts only)
    #[arg(short = 's', long = "short", overrides_with = "full_stats")]
    pub short_stats: bool,

    /// Print full statistics (count, min, max, sum, average)
    #[arg(short = 'f', long = "full", overrides_with = "short_stats")]
    pub full_stats: bool,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Where and how result files are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputOptions {
    pub dir: PathBuf,
    pub prefix: String,
    pub append: bool,
}

impl OutputOptions {
    /// `<dir>/<prefix><category file name>`.
    pub fn path_for(&self, category: Category) -> PathBuf {
        self.dir
            .join(format!("{}{}", self.prefix, category.default_file_name()))
    }
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse the process arguments, exiting with a usage message on error.
    pub fn load() -> Self {
        Self::resolve(Settings::parse())
    }

    /// Parse an explicit argument list (first element is the program name).
    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Settings::try_parse_from(args).map(Self::resolve)
    }

    /// Apply the `--debug` override.
    fn resolve(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }

    /// Statistics verbosity; whichever of `-s`/`-f` came last wins, short by
    /// default.
    pub fn statistics_mode(&self) -> StatisticsMode {
        if self.full_stats {
            StatisticsMode::Full
        } else {
            StatisticsMode::Short
        }
    }

    pub fn output_options(&self) -> OutputOptions {
        OutputOptions {
            dir: self.output_path.clone(),
            prefix: self.prefix.clone(),
            append: self.append,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
