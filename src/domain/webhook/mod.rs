//! Webhook signature verification.
//!
//! Authenticates inbound webhook deliveries signed with HMAC-SHA256 over
//! `{message_id}.{timestamp}.{payload}`:
//!
//! - Timestamps more than 5 minutes from the local clock are rejected (replay protection)
//! - The signature header may carry several `v1,<base64>` entries (secret rotation)
//! - Digests are compared in constant time
//!
//! # Example
//!
//! ```
//! use recurrente_mcp::domain::webhook::{self, SigningSecret, WebhookEnvelope};
//!
//! let secret = SigningSecret::parse("whsec_c2VjcmV0LWtleQ==").unwrap();
//! let timestamp = "1704067200";
//! let payload = br#"{"event_type":"payment_intent.succeeded"}"#;
//! let header = webhook::sign("msg_1", timestamp, payload, &secret).unwrap();
//!
//! let envelope = WebhookEnvelope::new("msg_1", timestamp, payload, &header);
//! let result = webhook::verify_at(&envelope, &secret, 1_704_067_260);
//! assert!(result.valid);
//! ```

mod envelope;
mod errors;
mod signature;
mod verifier;

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

pub use envelope::{SigningSecret, WebhookEnvelope, SECRET_PREFIX};
pub use errors::VerificationError;
pub use signature::{SignatureCandidate, SIGNATURE_VERSION};
pub use verifier::{
    sign, verify, verify_at, verify_with_encoded_secret, verify_with_encoded_secret_at,
    VerificationResult, TIMESTAMP_TOLERANCE_SECS,
};

/// Standard alphabet, padding optional on decode.
pub(crate) const BASE64_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);
