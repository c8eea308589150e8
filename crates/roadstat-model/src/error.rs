//! Error types for the normalization engine.

use thiserror::Error;

/// Errors raised while normalizing a single dataset.
///
/// These are fatal for the dataset that raised them and are caught at the
/// orchestrator boundary; cell-level numeric failures never surface here
/// (they are recovered by lenient coercion).
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// No header contains any of the dataset's identifier candidates.
    #[error("no identifier column in {dataset}: no header contains any of {candidates:?}")]
    IdentifierNotFound {
        dataset: String,
        candidates: Vec<String>,
    },
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_not_found_display() {
        let error = NormalizeError::IdentifierNotFound {
            dataset: "accidents_time".to_string(),
            candidates: vec!["State".to_string(), "UT".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "no identifier column in accidents_time: no header contains any of [\"State\", \"UT\"]"
        );
    }
}
