use thiserror::Error;

#[derive(Error, Debug)]
pub enum BankOrderError {
    /// A collaborator refused the inputs (missing configuration, unsupported format...).
    #[error("Business rule violation: {0}")]
    BusinessRule(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Internal error: {0}")]
    InternalError(Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(feature = "storage-rocksdb")]
impl From<rocksdb::Error> for BankOrderError {
    fn from(e: rocksdb::Error) -> Self {
        BankOrderError::InternalError(Box::new(e))
    }
}

pub type Result<T> = std::result::Result<T, BankOrderError>;
