use hairhq_core::domain::chat::entities::ChatTurn;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct HairChatRequest {
    #[validate(length(max = 8000, message = "message must be at most 8000 characters"))]
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
    pub profile: Option<serde_json::Value>,
    pub plan_context: Option<serde_json::Value>,
    pub previous_response_id: Option<String>,
}
