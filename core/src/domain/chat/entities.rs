use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One conversation turn as the client sends it. Only `user` and `assistant`
/// turns with non-empty content make it into the prompt; everything else is
/// dropped silently during assembly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChatTurn {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

/// Detail record for a single style suggestion. The search fields are meant
/// to work as literal search-engine queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StyleDetail {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub why: String,
    #[serde(default)]
    pub image_search: String,
    #[serde(default)]
    pub youtube_search: String,
}

/// The chat path's output: a free-text reply plus the paired
/// idea-list/detail-list suggestion set. Every retained detail's trimmed
/// title matches an entry in `style_ideas`; unmatched ideas are kept even
/// without a detail record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StyleChatReply {
    pub reply: String,
    pub style_ideas: Vec<String>,
    pub style_details: Vec<StyleDetail>,
    pub response_id: Option<String>,
}
