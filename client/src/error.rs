use thiserror::Error;

/// Failures surfaced by the prediction client. `Display` is the text shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error: {status} - {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Unknown model code: {0}")]
    InvalidModel(String),
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidUrl(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}
