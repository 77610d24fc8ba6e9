use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Explorer API error: {0}")]
    ExplorerError(String),

    #[error("Contract not found at address {0}")]
    ContractNotFound(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Explanation backend error: {0}")]
    ExplainError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScannerError>;
