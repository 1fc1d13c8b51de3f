use reqwest::StatusCode;
use thiserror::Error;

/// Failure taxonomy for one source fetch. Adapters convert every one of
/// these into an error report; nothing escapes the fetch path as Err.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source cannot run with the current configuration.
    #[error("source disabled: {0}")]
    Disabled(&'static str),

    /// Connection, DNS, or timeout failure before a response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The source rejected the credentials.
    #[error("authentication rejected (HTTP {status}): {message}")]
    Auth { status: u16, message: String },

    /// HTTP 429.
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// Any other non-success HTTP status.
    #[error("unexpected HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    /// The body arrived but did not decode as the expected JSON shape.
    #[error("unparseable response body: {0}")]
    Parse(String),
}

impl SourceError {
    /// Classify a non-success HTTP status, preferring the source's own error
    /// message when the caller extracted one from the body.
    pub fn from_status(status: StatusCode, url: &str, message: Option<String>) -> Self {
        match status.as_u16() {
            401 | 403 => SourceError::Auth {
                status: status.as_u16(),
                message: message.unwrap_or_else(|| "credentials were not accepted".to_string()),
            },
            429 => SourceError::RateLimited(
                message.unwrap_or_else(|| format!("try again later ({})", url)),
            ),
            code => SourceError::Status {
                status: code,
                url: url.to_string(),
            },
        }
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            let url = err.url().map(|u| u.as_str().to_string()).unwrap_or_default();
            return SourceError::from_status(status, &url, None);
        }

        if err.is_decode() {
            return SourceError::Parse(err.to_string());
        }

        SourceError::Network(err.to_string())
    }
}
