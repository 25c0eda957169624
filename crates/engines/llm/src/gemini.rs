//! HTTP client for Google's generateContent API.

use crate::error::ServiceError;
use crate::prompt::{build_prompt, parse_suggestion, resolve_suggestion};
use crate::MoveOracle;
use checkers_core::{LlmSettings, Move, Position};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Asks a hosted Gemini model for a move.
#[derive(Debug, Clone)]
pub struct GeminiOracle {
    endpoint: String,
    api_key_env: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl GeminiOracle {
    /// Reads the API key from the environment once, up front.
    pub fn new(settings: &LlmSettings) -> Self {
        Self {
            endpoint: settings.endpoint.clone(),
            api_key_env: settings.api_key_env.clone(),
            api_key: settings.api_key(),
            timeout: settings.timeout(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl MoveOracle for GeminiOracle {
    fn suggest_move(&self, pos: &Position, legal: &[Move]) -> Result<Move, ServiceError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ServiceError::MissingApiKey(self.api_key_env.clone()))?;

        // Built per request so the client lives and dies on the calling thread
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;

        let prompt = build_prompt(pos, legal);
        debug!(endpoint = %self.endpoint, moves = legal.len(), "asking move service");

        let response = client
            .post(&self.endpoint)
            .header("x-goog-api-key", api_key)
            .json(&request_body(&prompt))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status(status.as_u16()));
        }

        let body = response.text()?;
        let text = response_text(&body)?;
        debug!(reply = %text, "move service replied");

        resolve_suggestion(parse_suggestion(&text)?, legal)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

pub fn request_body(prompt: &str) -> Value {
    serde_json::json!({
        "contents": [{ "parts": [{ "text": prompt }] }]
    })
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Pulls `candidates[0].content.parts[0].text` out of a response body.
pub fn response_text(body: &str) -> Result<String, ServiceError> {
    let parsed: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| ServiceError::MalformedResponse(e.to_string()))?;

    parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .ok_or_else(|| ServiceError::MalformedResponse("no candidate text".to_string()))
}

#[cfg(test)]
#[path = "gemini_tests.rs"]
mod gemini_tests;
