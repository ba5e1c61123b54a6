use astra::Response;
// errors.rs
use crate::sheets::SheetsError;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or the spreadsheet reads below it.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    NotFound(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    /// The spreadsheet was unreachable or rejected the read.
    #[error("{0}")]
    Upstream(String),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound(_) => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Upstream(_) | ServerError::Internal(_) => 500,
        }
    }
}

impl From<SheetsError> for ServerError {
    fn from(err: SheetsError) -> Self {
        ServerError::Upstream(err.to_string())
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> Self {
        ServerError::Internal(format!("JSON encode failed: {err}"))
    }
}
