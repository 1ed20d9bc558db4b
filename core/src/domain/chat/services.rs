use serde_json::Value;

use crate::domain::{
    chat::{
        entities::StyleChatReply,
        helpers::{filter_style_details, parse_style_details, parse_style_ideas},
        ports::ChatService,
        prompts::{chat_input, chat_instructions, resolve_message},
        value_objects::ChatInput,
    },
    common::{entities::app_errors::CoreError, helpers::extract_json_object, services::Service},
    generation::{GENERATION_TEMPERATURE, entities::GenerationRequest, ports::LLMClient},
    info::ports::InfoRepository,
};

impl<LLM, I> ChatService for Service<LLM, I>
where
    LLM: LLMClient,
    I: InfoRepository,
{
    async fn chat(&self, input: ChatInput) -> Result<StyleChatReply, CoreError> {
        let client = self.llm_client.as_ref().ok_or(CoreError::NotConfigured)?;

        let message = resolve_message(&input.message);
        let user_input = chat_input(
            &input.profile,
            &input.history,
            input.plan_context.as_ref(),
            &message,
            &self.prompts,
        );

        let output = client
            .generate(GenerationRequest {
                instructions: chat_instructions().to_string(),
                input: user_input,
                temperature: GENERATION_TEMPERATURE,
                previous_response_id: input.previous_response_id,
            })
            .await?;

        let parsed = extract_json_object(&output.text);
        let reply = parsed
            .get("reply")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let style_ideas = parse_style_ideas(parsed.get("style_ideas"));
        let style_details =
            filter_style_details(&style_ideas, parse_style_details(parsed.get("style_details")));

        Ok(StyleChatReply {
            reply,
            style_ideas,
            style_details,
            response_id: output.response_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::entities::ChatTurn;
    use crate::domain::chat::prompts::DEFAULT_CONTEXT_PROMPT;
    use crate::domain::common::PromptSettings;
    use crate::domain::generation::entities::GenerationOutput;
    use crate::domain::generation::ports::MockLLMClient;
    use crate::domain::info::ports::MockInfoRepository;
    use serde_json::json;
    use std::future::ready;

    fn service(llm_client: Option<MockLLMClient>) -> Service<MockLLMClient, MockInfoRepository> {
        Service::new(llm_client, MockInfoRepository::new(), PromptSettings::default())
    }

    fn output(text: String, response_id: &str) -> GenerationOutput {
        GenerationOutput {
            text,
            response_id: Some(response_id.to_string()),
        }
    }

    #[tokio::test]
    async fn not_configured_short_circuits_without_calling_out() {
        let result = service(None).chat(ChatInput::default()).await;
        assert!(matches!(result, Err(CoreError::NotConfigured)));
    }

    #[tokio::test]
    async fn mismatched_details_are_dropped_but_ideas_survive() {
        let reply = json!({
            "reply": "here are some ideas",
            "style_ideas": ["Box Braids", "Wolf Cut"],
            "style_details": [
                {"title": "Box Braids", "why": "protective"},
                {"title": "Twist Out", "why": "not offered"}
            ]
        });

        let mut llm = MockLLMClient::new();
        llm.expect_generate()
            .times(1)
            .returning(move |_| Box::pin(ready(Ok(output(reply.to_string(), "resp_2")))));

        let result = service(Some(llm))
            .chat(ChatInput {
                message: "what suits me?".to_string(),
                ..ChatInput::default()
            })
            .await
            .expect("reply");

        assert_eq!(result.style_ideas, vec!["Box Braids", "Wolf Cut"]);
        assert_eq!(result.style_details.len(), 1);
        assert_eq!(result.style_details[0].title, "Box Braids");
        assert_eq!(result.response_id.as_deref(), Some("resp_2"));
    }

    #[tokio::test]
    async fn init_context_sentinel_is_rewritten_into_a_real_request() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate()
            .withf(|request| {
                request
                    .input
                    .ends_with(&format!("USER: {DEFAULT_CONTEXT_PROMPT}"))
            })
            .times(1)
            .returning(|_| Box::pin(ready(Ok(output("{}".to_string(), "resp_3")))));

        let result = service(Some(llm))
            .chat(ChatInput {
                message: "INIT_CONTEXT".to_string(),
                ..ChatInput::default()
            })
            .await
            .expect("reply");

        assert_eq!(result.reply, "");
        assert!(result.style_ideas.is_empty());
    }

    #[tokio::test]
    async fn continuation_token_is_passed_through_and_refreshed() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate()
            .withf(|request| request.previous_response_id.as_deref() == Some("resp_old"))
            .times(1)
            .returning(|_| {
                Box::pin(ready(Ok(output(
                    json!({"reply": "more ideas"}).to_string(),
                    "resp_new",
                ))))
            });

        let result = service(Some(llm))
            .chat(ChatInput {
                message: "more".to_string(),
                history: vec![ChatTurn {
                    role: "assistant".to_string(),
                    content: "earlier ideas".to_string(),
                }],
                previous_response_id: Some("resp_old".to_string()),
                ..ChatInput::default()
            })
            .await
            .expect("reply");

        assert_eq!(result.reply, "more ideas");
        assert_eq!(result.response_id.as_deref(), Some("resp_new"));
    }

    #[tokio::test]
    async fn garbage_output_degrades_to_empty_fields() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate()
            .times(1)
            .returning(|_| Box::pin(ready(Ok(output("no json at all".to_string(), "resp_4")))));

        let result = service(Some(llm))
            .chat(ChatInput {
                message: "hi".to_string(),
                ..ChatInput::default()
            })
            .await
            .expect("reply");

        assert_eq!(result.reply, "");
        assert!(result.style_ideas.is_empty());
        assert!(result.style_details.is_empty());
        assert_eq!(result.response_id.as_deref(), Some("resp_4"));
    }
}
