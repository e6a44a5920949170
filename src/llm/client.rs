use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ResponderError, SummarizerError};
use crate::llm::validation::parse_summary_payload;
use crate::llm::{build_reply_prompt, build_summary_prompt, summary_response_schema};
use crate::models::{MeetingSummary, Persona, Transcript, TranscriptEntry};
use crate::orchestrator::Responder;
use crate::summarizer::Summarizer;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration for the Gemini API client
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key (from GEMINI_API_KEY or API_KEY env var)
    pub api_key: String,
    /// Model to use (e.g., "gemini-2.5-flash")
    pub model: String,
    /// Temperature for persona replies (0-1)
    pub temperature: f64,
    /// Maximum tokens in a response
    pub max_output_tokens: u32,
}

impl GeminiConfig {
    /// Create config from environment variables
    ///
    /// Failing here is fatal: the meeting must not start without a
    /// credential for the external model.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .context("GEMINI_API_KEY environment variable not set")?;

        Ok(Self {
            api_key,
            model: "gemini-2.5-flash".to_string(),
            temperature: 0.7,
            max_output_tokens: 2048,
        })
    }

    /// Create with custom settings
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            temperature: 0.7,
            max_output_tokens: 2048,
        }
    }
}

/// Gemini API client
///
/// Implements both collaborator seams of the meeting core: [`Responder`]
/// for persona replies and [`Summarizer`] for structured minutes. Each call
/// is attempted once; no retries.
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Generate free text under a persona's system instruction
    pub async fn generate_text(&self, system: &str, prompt: &str) -> Result<String, ApiError> {
        let request = GenerateRequest {
            contents: vec![RequestContent {
                role: "user".to_string(),
                parts: vec![TextPart {
                    text: prompt.to_string(),
                }],
            }],
            system_instruction: Some(SystemInstruction {
                parts: vec![TextPart {
                    text: system.to_string(),
                }],
            }),
            generation_config: GenerationConfig {
                temperature: Some(self.config.temperature),
                max_output_tokens: Some(self.config.max_output_tokens),
                response_mime_type: None,
                response_schema: None,
            },
        };

        self.generate(request).await
    }

    /// Generate JSON constrained to the given response schema
    ///
    /// Returns the raw payload text; the caller validates it at the
    /// boundary.
    pub async fn generate_structured(
        &self,
        prompt: &str,
        schema: serde_json::Value,
    ) -> Result<String, ApiError> {
        let request = GenerateRequest {
            contents: vec![RequestContent {
                role: "user".to_string(),
                parts: vec![TextPart {
                    text: prompt.to_string(),
                }],
            }],
            system_instruction: None,
            generation_config: GenerationConfig {
                temperature: None,
                max_output_tokens: Some(self.config.max_output_tokens),
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(schema),
            },
        };

        self.generate(request).await
    }

    async fn generate(&self, request: GenerateRequest) -> Result<String, ApiError> {
        let url = format!(
            "{}/models/{}:generateContent",
            API_BASE, self.config.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        let response: GenerateResponse = response.json().await?;

        // Extract text from the first candidate's first part
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::EmptyResponse)
    }
}

impl Responder for GeminiClient {
    async fn respond(
        &self,
        persona: &Persona,
        transcript: &Transcript,
        utterance: &str,
    ) -> Result<String, ResponderError> {
        let prompt = build_reply_prompt(transcript, utterance);
        let text = self
            .generate_text(&persona.instructions, &prompt)
            .await?;
        Ok(text)
    }
}

impl Summarizer for GeminiClient {
    async fn summarize(
        &self,
        entries: &[TranscriptEntry],
    ) -> Result<MeetingSummary, SummarizerError> {
        let prompt = build_summary_prompt(entries);
        let payload = self
            .generate_structured(&prompt, summary_response_schema())
            .await?;
        let summary = parse_summary_payload(&payload)?;
        Ok(summary)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<SystemInstruction>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    role: String,
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TextPart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}
