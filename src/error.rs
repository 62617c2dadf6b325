//! Error taxonomy for the session hub
//!
//! Nothing in this subsystem is process-fatal: rejected requests go back
//! to the caller, per-peer delivery failures are counted and swallowed in
//! the broadcaster, and double leaves are no-ops by construction of the
//! registration guard.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HubError {
    /// A malformed client request (e.g. an empty notification message).
    /// Surfaced as a rejected-request response, never fatal to the hub.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl HubError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

pub type HubResult<T> = Result<T, HubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = HubError::invalid_argument("message cannot be empty");
        assert_eq!(
            err.to_string(),
            "invalid argument: message cannot be empty"
        );
    }
}
