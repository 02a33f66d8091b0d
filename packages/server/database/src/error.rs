use domain::InconsistentRecord;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Risk {0} not found")]
    NotFound(i64),

    #[error("Corrupt risk record: {0}")]
    Corrupt(#[from] InconsistentRecord),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
