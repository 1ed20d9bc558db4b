use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    generation::{
        entities::{GenerationOutput, GenerationRequest},
        ports::LLMClient,
    },
};

const RESPONSES_URL: &str = "https://api.openai.com/v1/responses";

#[derive(Debug, Clone)]
pub struct OpenAiLLMClient {
    api_key: String,
    model_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    instructions: &'a str,
    input: &'a str,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    previous_response_id: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ResponsesResponse {
    id: String,
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<OutputContent>,
}

#[derive(Debug, Deserialize)]
struct OutputContent {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

impl OpenAiLLMClient {
    pub fn new(api_key: String, model_name: String) -> Self {
        Self {
            api_key,
            model_name,
            client: Client::new(),
        }
    }

    async fn call_responses_api(
        &self,
        request: ResponsesRequest<'_>,
    ) -> Result<ResponsesResponse, CoreError> {
        let response = self
            .client
            .post(RESPONSES_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OpenAI API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("OpenAI API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        response.json().await.map_err(|e| {
            tracing::error!("Failed to parse OpenAI response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })
    }
}

impl LLMClient for OpenAiLLMClient {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationOutput, CoreError> {
        let body = ResponsesRequest {
            model: &self.model_name,
            instructions: &request.instructions,
            input: &request.input,
            temperature: request.temperature,
            previous_response_id: request.previous_response_id.as_deref(),
        };

        let response = self.call_responses_api(body).await?;
        if response.output.is_empty() {
            return Err(CoreError::ExternalServiceError(
                "No response from LLM".to_string(),
            ));
        }

        let text = response
            .output
            .iter()
            .flat_map(|item| item.content.iter())
            .filter(|part| part.kind == "output_text")
            .map(|part| part.text.as_str())
            .collect::<Vec<_>>()
            .join("");

        Ok(GenerationOutput {
            text,
            response_id: Some(response.id),
        })
    }
}
