use crate::domain::chat::entities::ChatTurn;

/// Inbound chat request after HTTP-layer defaults are applied. The profile
/// is passed through as raw JSON (the chat path does not canonicalize it);
/// `previous_response_id` is the opaque continuation token from an earlier
/// call, if any.
#[derive(Debug, Clone, Default)]
pub struct ChatInput {
    pub message: String,
    pub history: Vec<ChatTurn>,
    pub profile: serde_json::Value,
    pub plan_context: Option<serde_json::Value>,
    pub previous_response_id: Option<String>,
}
