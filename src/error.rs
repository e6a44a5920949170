use thiserror::Error;

/// Failure talking to the model API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to model API failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("model API error: {status} - {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("no text content in model response")]
    EmptyResponse,
}

/// A single persona's reply failed
///
/// Recovered inside the turn loop by substituting the fallback reply; never
/// aborts the turn.
#[derive(Debug, Error)]
pub enum ResponderError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Summary generation failed
///
/// Recovered by returning the sentinel summary record; never surfaced to the
/// caller as an error.
#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("summary payload did not match the expected shape: {0}")]
    Payload(#[from] serde_json::Error),
}
