//! Submission outcomes
//!
//! The single outbound POST can fail three ways the page treats
//! differently: the endpoint was never configured, the endpoint answered
//! outside the 2xx range, or the request never completed at all.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// No endpoint was baked into this build; nothing was sent.
    #[error("form endpoint is not configured")]
    NotConfigured,

    /// The endpoint answered, but not with a 2xx status.
    #[error("form endpoint rejected the submission (status {0})")]
    Rejected(u16),

    /// The request never completed: network failure, refused
    /// connection, or an unserializable payload.
    #[error("failed to reach the form endpoint: {0}")]
    Transport(String),
}

/// Collapse an HTTP status into an outcome. Any 2xx counts as accepted;
/// the response body is never read.
pub fn response_outcome(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Rejected(status))
    }
}
