//! Inputs to webhook verification: the envelope and the signing secret.

use std::fmt;

use base64::Engine;
use secrecy::{ExposeSecret, SecretVec};

use super::errors::VerificationError;
use super::BASE64_LENIENT;

/// Prefix carried by provider-issued signing secrets.
pub const SECRET_PREFIX: &str = "whsec_";

/// A webhook delivery as seen at verification time.
///
/// Borrows every field from the inbound request; nothing is copied or kept
/// after verification returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebhookEnvelope<'a> {
    /// Value of the message-id header.
    pub message_id: &'a str,

    /// Value of the timestamp header (unix seconds, decimal ASCII).
    pub timestamp: &'a str,

    /// Raw request body, exactly as received.
    pub payload: &'a [u8],

    /// Value of the signature header (`v1,<base64> v1,<base64> ...`).
    pub signature_header: &'a str,
}

impl<'a> WebhookEnvelope<'a> {
    pub fn new(
        message_id: &'a str,
        timestamp: &'a str,
        payload: &'a [u8],
        signature_header: &'a str,
    ) -> Self {
        Self {
            message_id,
            timestamp,
            payload,
            signature_header,
        }
    }
}

/// Decoded HMAC key material.
///
/// Constructed from the provider string with [`SigningSecret::parse`]. The
/// bytes are zeroed on drop and never appear in `Debug` output.
pub struct SigningSecret(SecretVec<u8>);

impl SigningSecret {
    /// Decodes a provider-issued secret.
    ///
    /// Strips a single leading `whsec_` if present, then base64-decodes the
    /// remainder (padding optional).
    ///
    /// # Errors
    ///
    /// Returns `VerificationError::MalformedSecret` if the remainder is not
    /// base64 or decodes to zero bytes.
    pub fn parse(raw: &str) -> Result<Self, VerificationError> {
        let encoded = raw.strip_prefix(SECRET_PREFIX).unwrap_or(raw);

        let bytes = BASE64_LENIENT
            .decode(encoded)
            .map_err(|e| VerificationError::MalformedSecret(e.to_string()))?;

        if bytes.is_empty() {
            return Err(VerificationError::MalformedSecret(
                "secret is empty".to_string(),
            ));
        }

        Ok(Self(SecretVec::new(bytes)))
    }

    /// Wraps raw key bytes that are already decoded.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(SecretVec::new(bytes))
    }

    pub(crate) fn expose(&self) -> &[u8] {
        self.0.expose_secret().as_slice()
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret([REDACTED])")
    }
}
