use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Auth error: {0}")]
    Auth(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Sheets API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for SheetsError {
    fn from(err: reqwest::Error) -> Self {
        SheetsError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SheetsError {
    fn from(err: serde_json::Error) -> Self {
        SheetsError::Parse(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for SheetsError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        SheetsError::Auth(err.to_string())
    }
}

impl From<std::io::Error> for SheetsError {
    fn from(err: std::io::Error) -> Self {
        SheetsError::Config(err.to_string())
    }
}
