use thiserror::Error;

#[derive(Error, Debug)]
pub enum PressError {
    /// The ticket store could not be reached, returned a non-success status,
    /// or answered with an error body. Never retried here; the caller decides.
    #[error("Ticket store unavailable: {0}")]
    CollaboratorUnavailable(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

impl From<reqwest::Error> for PressError {
    fn from(err: reqwest::Error) -> Self {
        PressError::CollaboratorUnavailable(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PressError>;
