//! Webhook Tools - signature verification without network access.

use serde::Deserialize;
use serde_json::json;

use crate::domain::tools::arguments::ToolArguments;
use crate::domain::tools::ToolDefinition;
use crate::domain::webhook::WebhookEnvelope;

/// Header values and body of a delivery, plus the endpoint secret.
#[derive(Clone, Deserialize)]
pub struct VerifyWebhookArgs {
    /// Raw request body
    pub payload: String,
    /// Signature header (`v1,<base64>` entries)
    pub signature: String,
    /// Message-id header
    pub message_id: String,
    /// Timestamp header
    pub timestamp: String,
    /// Endpoint signing secret (`whsec_...`)
    pub secret: String,
}

impl VerifyWebhookArgs {
    pub fn envelope(&self) -> WebhookEnvelope<'_> {
        WebhookEnvelope::new(
            &self.message_id,
            &self.timestamp,
            self.payload.as_bytes(),
            &self.signature,
        )
    }
}

impl ToolArguments for VerifyWebhookArgs {}

impl std::fmt::Debug for VerifyWebhookArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerifyWebhookArgs")
            .field("message_id", &self.message_id)
            .field("timestamp", &self.timestamp)
            .field("payload_len", &self.payload.len())
            .field("secret", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

pub fn verify_webhook_tool() -> ToolDefinition {
    ToolDefinition::new(
        "verify_webhook",
        "Verify a Recurrente/Svix webhook signature (HMAC-SHA256). Returns { valid: boolean }",
        json!({
            "type": "object",
            "required": ["payload", "signature", "message_id", "timestamp", "secret"],
            "properties": {
                "payload": { "type": "string", "description": "Raw webhook request body (string)" },
                "signature": { "type": "string", "description": "Svix-Signature header value (v1,<base64>)" },
                "message_id": { "type": "string", "description": "Svix-Id header value" },
                "timestamp": { "type": "string", "description": "Svix-Timestamp header value" },
                "secret": { "type": "string", "description": "Webhook signing secret from Recurrente (whsec_...)" }
            }
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tools::arguments::parse_arguments;

    fn sample() -> VerifyWebhookArgs {
        parse_arguments(&json!({
            "payload": "{\"a\":1}",
            "signature": "v1,abc",
            "message_id": "msg_1",
            "timestamp": "1700000000",
            "secret": "whsec_c2VjcmV0"
        }))
        .unwrap()
    }

    #[test]
    fn envelope_borrows_arguments() {
        let args = sample();
        let envelope = args.envelope();

        assert_eq!(envelope.message_id, "msg_1");
        assert_eq!(envelope.payload, b"{\"a\":1}");
        assert_eq!(envelope.signature_header, "v1,abc");
    }

    #[test]
    fn all_five_fields_are_required() {
        let result = parse_arguments::<VerifyWebhookArgs>(&json!({
            "payload": "{}",
            "signature": "v1,abc",
            "message_id": "msg_1",
            "timestamp": "1700000000"
        }));

        assert!(result.is_err());
        assert_eq!(verify_webhook_tool().required_arguments().len(), 5);
    }

    #[test]
    fn debug_hides_secret() {
        let debug = format!("{:?}", sample());

        assert!(!debug.contains("whsec_"));
        assert!(debug.contains("REDACTED"));
    }
}
