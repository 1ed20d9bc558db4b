use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    hair_chat::validators::HairChatRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use hairhq_core::domain::{
    chat::{
        entities::{StyleChatReply, StyleDetail},
        ports::ChatService,
        value_objects::ChatInput,
    },
    common::entities::app_errors::CoreError,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HairChatResponse {
    pub reply: String,
    pub style_ideas: Vec<String>,
    pub style_details: Vec<StyleDetail>,
    /// Continuation token for the next call. Omitted in fallback payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_id: Option<String>,
}

impl HairChatResponse {
    fn degraded(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            style_ideas: Vec::new(),
            style_details: Vec::new(),
            response_id: None,
        }
    }
}

impl From<StyleChatReply> for HairChatResponse {
    fn from(reply: StyleChatReply) -> Self {
        Self {
            reply: reply.reply,
            style_ideas: reply.style_ideas,
            style_details: reply.style_details,
            response_id: reply.response_id,
        }
    }
}

#[utoipa::path(
    post,
    path = "/hair-chat",
    tag = "hair-chat",
    summary = "Suggest styles in a conversational flow",
    description = "Asks the generation backend for style suggestions grounded in the supplied hair profile, recent conversation turns and optional plan context. Upstream failures degrade to an empty suggestion set rather than an error status.",
    request_body = HairChatRequest,
    responses(
        (status = 200, body = HairChatResponse)
    )
)]
pub async fn hair_chat(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<HairChatRequest>,
) -> Result<Response<HairChatResponse>, ApiError> {
    let input = ChatInput {
        message: payload.message,
        history: payload.history,
        profile: payload.profile.unwrap_or_else(|| serde_json::json!({})),
        plan_context: payload.plan_context,
        previous_response_id: payload.previous_response_id,
    };

    match state.service.chat(input).await {
        Ok(reply) => Ok(Response::OK(HairChatResponse::from(reply))),
        Err(CoreError::NotConfigured) => Ok(Response::OK(HairChatResponse::degraded(
            "Chat generation is not configured.",
        ))),
        Err(e) => {
            tracing::error!("Failed to generate chat reply: {}", e);
            Ok(Response::OK(HairChatResponse::degraded(
                "Something went wrong generating a response. Try again.",
            )))
        }
    }
}
