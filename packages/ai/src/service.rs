// ABOUTME: AI service for component generation calls to Google Gemini
// ABOUTME: Handles the generateContent request, response parsing and token usage

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use shipui_config::AppConfig;
use tracing::{error, info, warn};

use crate::error::{GenAIError, GenAIResult};

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    usage_metadata: Option<Usage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl Usage {
    pub fn total_tokens(&self) -> u32 {
        self.prompt_token_count + self.candidates_token_count
    }
}

#[derive(Debug)]
pub struct AIResponse<T> {
    pub data: T,
    pub usage: Usage,
}

/// Gemini client bound to one credential and model
pub struct GenAIService {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GenAIService {
    fn create_client(timeout: Duration) -> GenAIResult<Client> {
        Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| GenAIError::Transport(e.to_string()))
    }

    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> GenAIResult<Self> {
        Ok(Self {
            client: Self::create_client(timeout)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    /// Service using the configured endpoint and model with the given key
    pub fn with_api_key(config: &AppConfig, api_key: Option<String>) -> GenAIResult<Self> {
        Self::new(
            config.gemini_base_url.clone(),
            config.gemini_model.clone(),
            api_key,
            config.http_timeout,
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Makes a single-turn text generation call
    pub async fn generate_text(&self, prompt: &str) -> GenAIResult<AIResponse<String>> {
        let api_key = self.api_key.as_ref().ok_or(GenAIError::MissingCredential)?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        info!(model = %self.model, "Making Gemini generateContent request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    error!("Gemini request timed out");
                    GenAIError::Transport("Request timed out. The AI service may be overloaded or unavailable.".to_string())
                } else {
                    error!("Gemini request failed: {}", e);
                    GenAIError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = GenAIError::from_response(status.as_u16(), &body);
            error!(%status, kind = %err.kind(), "Gemini API error");
            return Err(err);
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenAIError::InvalidResponse(e.to_string()))?;

        if let Some(reason) = parsed
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.clone())
        {
            warn!(%reason, "prompt blocked by Gemini");
            return Err(GenAIError::Blocked(reason));
        }

        let usage = parsed.usage_metadata.unwrap_or_default();
        let candidate = parsed.candidates.into_iter().next().ok_or(GenAIError::EmptyResponse)?;
        let finish_reason = candidate.finish_reason.unwrap_or_default();

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            if finish_reason == "SAFETY" {
                return Err(GenAIError::Blocked(finish_reason));
            }
            return Err(GenAIError::EmptyResponse);
        }

        info!(
            tokens = usage.total_tokens(),
            chars = text.len(),
            "Received Gemini response"
        );

        Ok(AIResponse { data: text, usage })
    }
}
