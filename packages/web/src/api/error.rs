use reqwest::StatusCode;

/// Error type for backend API calls
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(StatusCode),

    #[error("Unexpected response format")]
    UnexpectedFormat,
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status(status) => Some(*status),
            ApiError::Network(err) => err.status(),
            ApiError::UnexpectedFormat => None,
        }
    }
}
