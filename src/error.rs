use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemandError {
    #[error("Malformed {collection} record at index {index}: {message}")]
    MalformedRecord {
        collection: &'static str,
        index: usize,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No input file provided")]
    NoInputFile,
}

pub type Result<T> = std::result::Result<T, DemandError>;
