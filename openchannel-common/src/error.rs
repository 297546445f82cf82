use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum OcError {
    /// The marketplace answered with anything other than 200. `body` is the
    /// response text exactly as received.
    #[error("API Error {code}: {body}")]
    Api { code: u16, body: String },

    #[error("HTTP Request Error: {0}")]
    Http(#[from] Arc<reqwest::Error>),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] Arc<serde_json::Error>),

    #[error("I/O Error: {0}")]
    Io(#[from] Arc<std::io::Error>),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Parsing Error in {0}: {1}")]
    ParseError(&'static str, String),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Validation Error: {0}")]
    ValidationError(String),
}

impl OcError {
    /// HTTP status carried by an [`OcError::Api`] error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            OcError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OcError {
    fn from(err: std::io::Error) -> Self {
        OcError::Io(Arc::new(err))
    }
}

impl From<reqwest::Error> for OcError {
    fn from(err: reqwest::Error) -> Self {
        OcError::Http(Arc::new(err))
    }
}

impl From<serde_json::Error> for OcError {
    fn from(err: serde_json::Error) -> Self {
        OcError::Json(Arc::new(err))
    }
}

pub type Result<T> = std::result::Result<T, OcError>;
