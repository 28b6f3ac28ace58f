use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while fetching a forecast.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The configured base URL could not be parsed.
    #[error("Unable to construct request URL from {base_url}: {reason}")]
    Url { base_url: String, reason: String },

    /// The API host could not be reached, or the body could not be read.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The API answered with a status of 400 or above. Displays as the raw response body.
    /// Bytes of the body that are not valid UTF-8 are replaced with U+FFFD.
    #[error("{body}")]
    Api { status: StatusCode, body: String },

    /// The API answered successfully but the body is not a forecast.
    #[error("Unable to deserialize response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ForecastError {
    /// The HTTP status of an API error response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ForecastError::Api { status, .. } => Some(*status),
            ForecastError::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// Whether the same request might succeed if sent again later. The library never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            ForecastError::Transport(_) => true,
            ForecastError::Api { status, .. } => status.is_server_error(),
            ForecastError::Url { .. } | ForecastError::Decode(_) => false,
        }
    }
}
