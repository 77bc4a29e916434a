//! VerifyWebhookHandler - local webhook signature verification.

use crate::domain::tools::definitions::VerifyWebhookArgs;
use crate::domain::webhook::{self, VerificationResult};

/// Verifies deliveries against the secret passed in the arguments.
///
/// No network access and no state; the secret and payload are never logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerifyWebhookHandler;

impl VerifyWebhookHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, args: &VerifyWebhookArgs) -> VerificationResult {
        self.handle_at(args, chrono::Utc::now().timestamp())
    }

    /// As [`handle`](Self::handle), with the clock supplied.
    pub fn handle_at(&self, args: &VerifyWebhookArgs, now: i64) -> VerificationResult {
        let result = webhook::verify_with_encoded_secret_at(&args.envelope(), &args.secret, now);

        match &result.error {
            None => tracing::debug!(message_id = %args.message_id, "Webhook signature verified"),
            Some(reason) => tracing::warn!(
                message_id = %args.message_id,
                timestamp = %args.timestamp,
                reason = %reason,
                "Webhook signature rejected"
            ),
        }

        result
    }
}
