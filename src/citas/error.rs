use thiserror::Error;

#[derive(Error, Debug)]
pub enum CitasError {
    /// A form was submitted with required fields still empty. Recoverable:
    /// the form stays open and the user is re-prompted.
    #[error("All fields are required, missing: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CitasError>;
