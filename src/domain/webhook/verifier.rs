//! HMAC-SHA256 webhook signature verification.
//!
//! The signed content is `{message_id}.{timestamp}.{payload}`, byte for byte.
//! Verification is a pure function of its inputs and the wall clock: it does
//! no I/O, holds no state, and folds every failure into a
//! [`VerificationResult`] instead of returning an error.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::envelope::{SigningSecret, WebhookEnvelope};
use super::errors::VerificationError;
use super::signature::{SignatureCandidate, SIGNATURE_VERSION};

type HmacSha256 = Hmac<Sha256>;

/// Maximum distance between the webhook timestamp and the local clock (5 minutes).
pub const TIMESTAMP_TOLERANCE_SECS: u64 = 300;

/// Outcome of verifying one webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub valid: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VerificationResult {
    pub fn accepted() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn rejected(error: &VerificationError) -> Self {
        Self {
            valid: false,
            error: Some(error.to_string()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl From<Result<(), VerificationError>> for VerificationResult {
    fn from(outcome: Result<(), VerificationError>) -> Self {
        match outcome {
            Ok(()) => Self::accepted(),
            Err(e) => Self::rejected(&e),
        }
    }
}

/// Verifies a webhook against an already decoded secret, using the current time.
pub fn verify(envelope: &WebhookEnvelope<'_>, secret: &SigningSecret) -> VerificationResult {
    verify_at(envelope, secret, chrono::Utc::now().timestamp())
}

/// Verifies a webhook against an already decoded secret at a given unix time.
pub fn verify_at(
    envelope: &WebhookEnvelope<'_>,
    secret: &SigningSecret,
    now: i64,
) -> VerificationResult {
    check_timestamp(envelope.timestamp, now)
        .and_then(|()| check_signature(envelope, secret))
        .into()
}

/// Verifies a webhook against a provider-format secret (`whsec_...`), using
/// the current time.
pub fn verify_with_encoded_secret(
    envelope: &WebhookEnvelope<'_>,
    secret: &str,
) -> VerificationResult {
    verify_with_encoded_secret_at(envelope, secret, chrono::Utc::now().timestamp())
}

/// Verifies a webhook against a provider-format secret at a given unix time.
///
/// The timestamp is checked before the secret is decoded, so a stale
/// delivery is reported as stale even when the secret is also malformed.
pub fn verify_with_encoded_secret_at(
    envelope: &WebhookEnvelope<'_>,
    secret: &str,
    now: i64,
) -> VerificationResult {
    check_timestamp(envelope.timestamp, now)
        .and_then(|()| SigningSecret::parse(secret))
        .and_then(|secret| check_signature(envelope, &secret))
        .into()
}

/// Produces a `v1,<base64>` signature header entry for the given content.
///
/// # Errors
///
/// Returns `VerificationError::MalformedSecret` only if the HMAC rejects the key.
pub fn sign(
    message_id: &str,
    timestamp: &str,
    payload: &[u8],
    secret: &SigningSecret,
) -> Result<String, VerificationError> {
    let digest = compute_digest(secret, message_id, timestamp, payload)?;
    Ok(format!("{},{}", SIGNATURE_VERSION, STANDARD.encode(digest)))
}

fn check_timestamp(raw: &str, now: i64) -> Result<(), VerificationError> {
    let timestamp: i64 = raw
        .parse()
        .map_err(|e: std::num::ParseIntError| VerificationError::MalformedTimestamp(e.to_string()))?;

    if now.abs_diff(timestamp) > TIMESTAMP_TOLERANCE_SECS {
        return Err(VerificationError::StaleTimestamp);
    }

    Ok(())
}

fn check_signature(
    envelope: &WebhookEnvelope<'_>,
    secret: &SigningSecret,
) -> Result<(), VerificationError> {
    let expected = compute_digest(
        secret,
        envelope.message_id,
        envelope.timestamp,
        envelope.payload,
    )?;

    let matched = SignatureCandidate::parse_header(envelope.signature_header)
        .any(|candidate| constant_time_compare(&expected, candidate.digest()));

    if matched {
        Ok(())
    } else {
        Err(VerificationError::NoMatchingSignature)
    }
}

fn compute_digest(
    secret: &SigningSecret,
    message_id: &str,
    timestamp: &str,
    payload: &[u8],
) -> Result<Vec<u8>, VerificationError> {
    let mut mac = HmacSha256::new_from_slice(secret.expose())
        .map_err(|e| VerificationError::MalformedSecret(e.to_string()))?;

    mac.update(message_id.as_bytes());
    mac.update(b".");
    mac.update(timestamp.as_bytes());
    mac.update(b".");
    mac.update(payload);

    Ok(mac.finalize().into_bytes().to_vec())
}

/// Compares two digests without leaking where they differ.
///
/// Lengths are public, so a length mismatch returns early.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
