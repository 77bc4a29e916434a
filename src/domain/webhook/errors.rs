//! Webhook verification error taxonomy.
//!
//! Every variant is folded into a [`VerificationResult`](super::VerificationResult)
//! before it leaves the verifier; callers never see these as `Err`.

use thiserror::Error;

/// Reasons a webhook fails authentication.
///
/// Malformed signature header entries have no variant: they are skipped
/// during parsing and only show up as [`VerificationError::NoMatchingSignature`]
/// when nothing else matches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// Timestamp header is not an integer number of seconds.
    #[error("Invalid timestamp: {0}")]
    MalformedTimestamp(String),

    /// Timestamp is more than five minutes away from the local clock.
    #[error("Timestamp outside tolerance (>5min)")]
    StaleTimestamp,

    /// Signing secret is not valid base64 once the prefix is removed.
    #[error("Invalid signing secret: {0}")]
    MalformedSecret(String),

    /// No `v1` candidate in the header matched the expected digest.
    #[error("no matching signature found")]
    NoMatchingSignature,
}

impl VerificationError {
    /// Returns true for failures caused by the timestamp header alone.
    pub fn is_timestamp_error(&self) -> bool {
        matches!(
            self,
            VerificationError::MalformedTimestamp(_) | VerificationError::StaleTimestamp
        )
    }
}
