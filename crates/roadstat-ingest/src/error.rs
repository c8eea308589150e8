//! Error types for data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading raw dataset files.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Dataset directory not found or not readable.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file contents.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing failed after decoding.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// A dataset directory exists but holds no CSV files.
    #[error("no CSV files in {path}")]
    NoCsvFiles { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_carries_path() {
        let error = IngestError::NoCsvFiles {
            path: PathBuf::from("/data/Vehicles Registrations"),
        };
        assert_eq!(
            error.to_string(),
            "no CSV files in /data/Vehicles Registrations"
        );
    }
}
