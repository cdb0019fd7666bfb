use thiserror::Error;

/// A candidate record failed the non-empty-field invariant. Raised before any
/// mutation; the store never holds a partially valid record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
}

/// Failures while loading or flushing the backing file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: missing data fields (expected 5, found {found})")]
    MissingFields { line: usize, found: usize },

    #[error("line {line}: {source}")]
    CorruptRecord {
        line: usize,
        source: ValidationError,
    },
}

impl StoreError {
    /// True for errors caused by the file contents rather than the filesystem.
    pub fn is_corrupt_data(&self) -> bool {
        matches!(
            self,
            StoreError::MissingFields { .. } | StoreError::CorruptRecord { .. }
        )
    }
}
