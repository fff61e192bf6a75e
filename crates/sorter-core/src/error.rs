use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the line sorter.
///
/// Classification and aggregation never fail; every variant here belongs to
/// reading input or writing output.
#[derive(Error, Debug)]
pub enum SorterError {
    /// An input file could not be opened or read.
    #[error("file not present or is not accessible: {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output file could not be created, truncated or appended to.
    #[error("unable to create file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configured output directory does not exist.
    #[error("output directory not found: {0}")]
    OutputDirMissing(PathBuf),
}

/// Convenience alias used throughout the sorter crates.
pub type Result<T> = std::result::Result<T, SorterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = SorterError::FileRead {
            path: PathBuf::from("/some/in1.txt"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("not present or is not accessible"));
        assert!(msg.contains("/some/in1.txt"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_file_write() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = SorterError::FileWrite {
            path: PathBuf::from("/out/integers.txt"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("unable to create file /out/integers.txt"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_error_display_output_dir_missing() {
        let err = SorterError::OutputDirMissing(PathBuf::from("/missing/dir"));
        assert_eq!(err.to_string(), "output directory not found: /missing/dir");
    }
}
