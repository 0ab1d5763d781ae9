//! Error types for clima-io.

use std::path::PathBuf;

use clima_series::SeriesError;

/// Error type for all fallible operations in the clima-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps a filesystem error.
    #[error("io error: {reason}")]
    Io {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Wraps an error originating from the CSV library.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Wraps a JSON serialization error.
    #[error("json error: {reason}")]
    Json {
        /// Description of the underlying JSON failure.
        reason: String,
    },

    /// Returned when a required column is not present in the header.
    #[error("column '{name}' not found in {source_name}")]
    MissingColumn {
        /// Name of the missing column.
        name: String,
        /// File or stream that was inspected.
        source_name: String,
    },

    /// Returned when a field cannot be parsed.
    #[error("line {line}, column '{column}': {reason}")]
    Parse {
        /// 1-based line number in the input.
        line: u64,
        /// Column name.
        column: String,
        /// Description of the parse failure.
        reason: String,
    },

    /// Returned when the parsed rows violate the daily input contract.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },
}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Io {
            reason: e.to_string(),
        }
    }
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Json {
            reason: e.to_string(),
        }
    }
}

impl From<SeriesError> for IoError {
    fn from(e: SeriesError) -> Self {
        match e {
            SeriesError::Validation { count, details } => IoError::Validation { count, details },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.csv");
    }

    #[test]
    fn display_missing_column() {
        let err = IoError::MissingColumn {
            name: "temp_max".to_string(),
            source_name: "/data/clean.csv".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "column 'temp_max' not found in /data/clean.csv"
        );
    }

    #[test]
    fn display_parse() {
        let err = IoError::Parse {
            line: 12,
            column: "precipitation".to_string(),
            reason: "invalid float literal".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "line 12, column 'precipitation': invalid float literal"
        );
    }

    #[test]
    fn display_validation() {
        let err = IoError::Validation {
            count: 2,
            details: "duplicate date 1990-01-01; negative precipitation on 1990-01-02: -1"
                .to_string(),
        };
        assert_eq!(
            err.to_string(),
            "2 validation error(s): duplicate date 1990-01-01; negative precipitation on 1990-01-02: -1"
        );
    }

    #[test]
    fn from_series_error() {
        let err: IoError = SeriesError::Validation {
            count: 1,
            details: "duplicate date 2000-01-01".to_string(),
        }
        .into();
        assert!(matches!(err, IoError::Validation { count: 1, .. }));
    }

    #[test]
    fn from_io_error() {
        let err: IoError = std::io::Error::other("disk full").into();
        assert_eq!(err.to_string(), "io error: disk full");
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IoError>();
    }
}
