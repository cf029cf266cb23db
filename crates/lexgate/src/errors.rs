use thiserror::Error;

/// Errors raised while validating an inbound chat request.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Malformed request body: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors raised on the essential forwarding path to the primary provider.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("API key for {0} is not configured")]
    MissingApiKey(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;
