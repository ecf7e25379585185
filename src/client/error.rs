use thiserror::Error;

/// Transport-level failures seen by the counter client.
///
/// These never escape the client boundary; callers always receive a
/// resolved count (possibly 0). The variants exist so the log can say
/// what actually went wrong.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network failure, or the response body could not be decoded.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("Unexpected status: {0}")]
    Status(u16),
}
