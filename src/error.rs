///! Error type shared by the two remote-call boundaries.

use thiserror::Error;

/// Failure of an outbound HTTP call (fetch or notify).
///
/// Propagates to the entry point and aborts the run; there is no retry.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Transport-level failure, including response decoding
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP error {status} from {endpoint}")]
    Status {
        status: reqwest::StatusCode,
        endpoint: String,
    },
}
