//! Streaming transport for the generative text service

use crate::error::{CoachError, Result};
use crate::llm::extract::JsonObjectScanner;
use crate::model::ResumePayload;
use futures::StreamExt;
use log::debug;
use serde_json::{json, Value};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Roles the service understands in a conversation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

/// One prior turn of an interview conversation.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

pub struct GeminiClient {
    http: reqwest::Client,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(model: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            model,
            api_key,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_payload(
        prompt: &str,
        attachment: Option<&ResumePayload>,
        history: &[ChatTurn],
    ) -> Value {
        let mut contents: Vec<Value> = history
            .iter()
            .map(|turn| {
                json!({
                    "role": turn.role.as_str(),
                    "parts": [{"text": turn.text}]
                })
            })
            .collect();

        let mut parts = vec![json!({"text": prompt})];
        if let Some(ResumePayload::File { mime, data }) = attachment {
            parts.push(json!({
                "inlineData": {
                    "mimeType": mime,
                    "data": data
                }
            }));
        }
        contents.push(json!({"role": "user", "parts": parts}));

        json!({"contents": contents})
    }

    /// Stream a generation request, invoking `on_delta` for each text chunk
    /// in arrival order, and return the full accumulated text once the
    /// stream closes.
    pub async fn stream_generate(
        &self,
        prompt: &str,
        attachment: Option<&ResumePayload>,
        history: &[ChatTurn],
        on_delta: &mut dyn FnMut(&str),
    ) -> Result<String> {
        let url = format!(
            "{}/{}:streamGenerateContent?key={}",
            API_BASE, self.model, self.api_key
        );

        let payload = Self::request_payload(prompt, attachment, history);
        debug!("Streaming generation request to model {}", self.model);

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| CoachError::Network(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| CoachError::Network(format!("Failed to read response: {}", e)))?;
            return Err(CoachError::Network(Self::service_error(status, &body)));
        }

        // The service streams a JSON array of chunk objects, split at
        // arbitrary byte boundaries. Reframe into whole objects before
        // pulling candidate text out of each.
        let mut scanner = JsonObjectScanner::new();
        let mut pending: Vec<u8> = Vec::new();
        let mut accumulated = String::new();

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk =
                chunk.map_err(|e| CoachError::Network(format!("Failed to read stream: {}", e)))?;
            pending.extend_from_slice(&chunk);

            // Only hand complete UTF-8 to the scanner; a multi-byte char cut
            // by the chunk boundary waits for the next read
            let valid_len = match std::str::from_utf8(&pending) {
                Ok(_) => pending.len(),
                Err(e) => e.valid_up_to(),
            };
            if valid_len == 0 {
                continue;
            }
            let text = String::from_utf8_lossy(&pending[..valid_len]).into_owned();
            pending.drain(..valid_len);

            for object in scanner.push(&text) {
                for delta in Self::chunk_text(&object) {
                    on_delta(&delta);
                    accumulated.push_str(&delta);
                }
            }
        }

        Ok(accumulated)
    }

    /// Pull the text parts out of one streamed chunk object. Chunks that do
    /// not parse or carry no text are skipped.
    fn chunk_text(chunk_json: &str) -> Vec<String> {
        let value: Value = match serde_json::from_str(chunk_json) {
            Ok(v) => v,
            Err(_) => return Vec::new(),
        };

        value["candidates"][0]["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part["text"].as_str())
                    .filter(|text| !text.is_empty())
                    .map(|text| text.to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn service_error(status: reqwest::StatusCode, body: &str) -> String {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v["error"]["message"].as_str().map(|s| s.to_string()))
            .unwrap_or_else(|| format!("HTTP {}: {}", status, body));
        format!("Generative service error: {}", message)
    }
}
