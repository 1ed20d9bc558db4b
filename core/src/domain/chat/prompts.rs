use serde_json::Value;

use crate::domain::chat::entities::ChatTurn;
use crate::domain::common::PromptSettings;

/// Sentinel the frontend sends to pre-load context without real user text.
pub const INIT_CONTEXT_SENTINEL: &str = "INIT_CONTEXT";
pub const DEFAULT_CONTEXT_PROMPT: &str =
    "Based on my hair profile, suggest styles that usually work best for me.";

pub fn chat_instructions() -> &'static str {
    concat!(
        "You are HairHQ Style Assist, a professional stylist.\n",
        "The hair profile is authoritative and must be used.\n\n",
        "Respond ONLY in valid JSON with EXACT structure:\n",
        "{\n",
        "  \"reply\": string,\n",
        "  \"style_ideas\": [string, string, ...],\n",
        "  \"style_details\": [\n",
        "    {\n",
        "      \"title\": string,\n",
        "      \"why\": string,\n",
        "      \"image_search\": string,\n",
        "      \"youtube_search\": string\n",
        "    }\n",
        "  ]\n",
        "}\n\n",
        "RULES:\n",
        "- Generate 4-7 styles.\n",
        "- style_ideas must be short, clear style names someone would actually search.\n",
        "- style_details titles must match style_ideas exactly.\n",
        "- Use hair length + hair type/texture + porosity + goals + user intent.\n",
        "- image_search must work in Google Images.\n",
        "- youtube_search must work in YouTube search.\n",
        "- Include hair length + hair type in searches.\n",
        "- No brands. No vague aesthetic-only terms.\n",
    )
}

/// Rewrites the context-priming sentinel into a real request; everything
/// else passes through trimmed.
pub fn resolve_message(message: &str) -> String {
    let message = message.trim();
    if message == INIT_CONTEXT_SENTINEL {
        DEFAULT_CONTEXT_PROMPT.to_string()
    } else {
        message.to_string()
    }
}

/// Assembles the user-facing content: profile JSON, the trailing window of
/// valid conversation turns, an optional truncated plan-context blob, then
/// the current message.
pub fn chat_input(
    profile: &Value,
    history: &[ChatTurn],
    plan_context: Option<&Value>,
    message: &str,
    settings: &PromptSettings,
) -> String {
    let profile_json = serde_json::to_string_pretty(profile).unwrap_or_else(|_| String::from("{}"));
    let mut parts = vec![format!("HAIR_PROFILE_JSON:\n{profile_json}")];

    let start = history.len().saturating_sub(settings.history_turns);
    for turn in &history[start..] {
        let role = turn.role.trim().to_ascii_lowercase();
        let content = turn.content.trim();
        if (role == "user" || role == "assistant") && !content.is_empty() {
            parts.push(format!("{}: {content}", role.to_ascii_uppercase()));
        }
    }

    if let Some(context) = plan_context {
        let mut blob = context.to_string();
        if blob.chars().count() > settings.plan_context_max_chars {
            blob = blob.chars().take(settings.plan_context_max_chars).collect();
        }
        parts.push(format!("PLAN_CONTEXT_JSON:\n{blob}"));
    }

    parts.push(format!("USER: {message}"));
    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn turn(role: &str, content: &str) -> ChatTurn {
        ChatTurn {
            role: role.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn resolve_message_rewrites_the_sentinel() {
        assert_eq!(resolve_message("INIT_CONTEXT"), DEFAULT_CONTEXT_PROMPT);
        assert_eq!(resolve_message("  INIT_CONTEXT  "), DEFAULT_CONTEXT_PROMPT);
        assert_eq!(resolve_message(" braids? "), "braids?");
    }

    #[test]
    fn chat_input_keeps_only_the_trailing_history_window() {
        let history: Vec<ChatTurn> = (0..10)
            .map(|i| turn("user", &format!("message {i}")))
            .collect();
        let input = chat_input(
            &json!({}),
            &history,
            None,
            "now",
            &PromptSettings::default(),
        );

        assert!(!input.contains("message 0"));
        assert!(!input.contains("message 1\n"));
        assert!(input.contains("USER: message 2"));
        assert!(input.contains("USER: message 9"));
    }

    #[test]
    fn chat_input_drops_invalid_roles_and_blank_content() {
        let history = vec![
            turn("system", "ignore me"),
            turn("User", "kept despite casing"),
            turn("assistant", "   "),
            turn("assistant", "an answer"),
        ];
        let input = chat_input(
            &json!({}),
            &history,
            None,
            "now",
            &PromptSettings::default(),
        );

        assert!(!input.contains("ignore me"));
        assert!(input.contains("USER: kept despite casing"));
        assert!(input.contains("ASSISTANT: an answer"));
    }

    #[test]
    fn chat_input_truncates_the_plan_context_blob() {
        let context = json!({"summary": "x".repeat(3000)});
        let input = chat_input(
            &json!({}),
            &[],
            Some(&context),
            "now",
            &PromptSettings::default(),
        );

        let blob = input
            .split("PLAN_CONTEXT_JSON:\n")
            .nth(1)
            .and_then(|rest| rest.split('\n').next())
            .expect("context blob");
        assert_eq!(blob.chars().count(), 2000);
    }

    #[test]
    fn chat_input_ends_with_the_current_message() {
        let input = chat_input(
            &json!({"hair_type": "coily"}),
            &[turn("user", "earlier")],
            None,
            "what about braids?",
            &PromptSettings::default(),
        );

        assert!(input.starts_with("HAIR_PROFILE_JSON:"));
        assert!(input.contains("\"hair_type\": \"coily\""));
        assert!(input.ends_with("USER: what about braids?"));
    }
}
