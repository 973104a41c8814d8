use crate::domain::ports::LlmService;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tracing::{error, info, warn, instrument};
use std::time::Duration;
use tokio::time::sleep;

const MAX_RETRIES: u32 = 2;
const INITIAL_BACKOFF_MS: u64 = 250;
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

pub struct GeminiService {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiService {
    pub fn new(api_key: String, request_timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(request_timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
            api_key,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent", self.model)
    }

    async fn send_request_with_retry(&self, payload: &Value) -> Result<String, AppError> {
        let url = self.endpoint();
        let mut retries = 0;
        let mut backoff = INITIAL_BACKOFF_MS;

        loop {
            let res = self.client.post(&url)
                .header("x-goog-api-key", &self.api_key)
                .json(payload)
                .send()
                .await;

            match res {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body: Value = response.json().await.map_err(|e| {
                            error!("Failed to parse Gemini response JSON: {:?}", e);
                            AppError::InternalWithMsg("AI response was not JSON".to_string())
                        })?;
                        return extract_text(&body);
                    } else if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
                        if retries >= MAX_RETRIES {
                            error!("Gemini API failed after {} retries. Status: {}", retries, status);
                            return Err(AppError::InternalWithMsg(format!("AI provider error: {}", status)));
                        }
                        warn!("Gemini API transient error {}. Retrying in {}ms...", status, backoff);
                    } else {
                        let text = response.text().await.unwrap_or_default();
                        error!("Gemini API terminal error {}: {}", status, text);
                        return Err(AppError::InternalWithMsg(format!("AI request rejected: {}", status)));
                    }
                },
                Err(e) => {
                    if retries >= MAX_RETRIES {
                        error!("Gemini network error after {} retries: {:?}", retries, e);
                        return Err(AppError::InternalWithMsg(format!("AI network error: {}", e)));
                    }
                    warn!("Gemini network error. Retrying in {}ms... {:?}", backoff, e);
                }
            }

            sleep(Duration::from_millis(backoff)).await;
            retries += 1;
            backoff *= 2;
        }
    }
}

/// Pulls the first candidate's text out of a `generateContent` reply.
fn extract_text(body: &Value) -> Result<String, AppError> {
    let candidate = body.get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first());

    if let Some(first) = candidate {
        if let Some(reason) = first.get("finishReason").and_then(|s| s.as_str())
            && reason != "STOP" {
            warn!("AI generation stopped abnormally. Reason: {}", reason);
            if reason == "SAFETY" {
                return Err(AppError::InternalWithMsg("AI reply blocked by safety filters".to_string()));
            }
        }

        if let Some(text) = first.pointer("/content/parts/0/text").and_then(|t| t.as_str()) {
            let cleaned = text.trim()
                .trim_start_matches("```text")
                .trim_start_matches("```")
                .trim_end_matches("```")
                .trim();
            return Ok(cleaned.to_string());
        }
    }

    error!("Unexpected response structure from Gemini: {:?}", body);
    Err(AppError::InternalWithMsg("AI response missing content".to_string()))
}

#[async_trait]
impl LlmService for GeminiService {
    #[instrument(skip(self, prompt, system_instruction), fields(prompt_len = prompt.len(), model = %self.model))]
    async fn generate(
        &self,
        prompt: &str,
        system_instruction: &str
    ) -> Result<String, AppError> {
        let payload = json!({
            "contents": [{
                "parts": [{"text": prompt}]
            }],
            "systemInstruction": {
                "parts": [{"text": system_instruction}]
            },
            "generationConfig": {
                "temperature": 0.4,
                "maxOutputTokens": 512
            }
        });

        info!("Sending recommendation request to Gemini...");
        let result = self.send_request_with_retry(&payload).await?;
        info!("Received recommendation reply from Gemini.");
        Ok(result)
    }
}
