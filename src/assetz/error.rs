use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetzError {
    #[error("Record #{0} not found")]
    RecordNotFound(i64),

    #[error("Not a valid record number: '{0}'")]
    InvalidIndex(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Input error: {0}")]
    Input(String),
}

impl AssetzError {
    /// Errors the user can fix by retrying; the shell reports these and keeps going.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AssetzError::RecordNotFound(_) | AssetzError::InvalidIndex(_)
        )
    }

    pub fn not_found(index: usize) -> Self {
        AssetzError::RecordNotFound(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

pub type Result<T> = std::result::Result<T, AssetzError>;
