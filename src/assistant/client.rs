//! Gemini `generateContent` wrapper
//!
//! One request per question: persona as the system instruction, the case
//! context and the question as two text parts of a single user turn. The
//! reply text is returned untouched. There are no retries, no streaming and
//! no caching; every failure collapses into one of the persona's fallback
//! lines.

use super::persona;
use super::prompts::{case_context, QuickPrompt};
use crate::case::InvestigationCase;
use crate::config::Config;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_TEMPERATURE: f32 = 0.8;
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/";
/// Upper bound on one question; a timed-out request ends the turn like any other failure
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("No Gemini API key configured")]
    NotConfigured,
    #[error("Invalid API endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Gemini API error ({status}): {body}")]
    Api { status: u16, body: String },
    #[error("Failed to parse Gemini response: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GenerateResponse {
    /// Text of the first candidate, all parts concatenated
    fn text(&self) -> String {
        self.candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

/// Client for the detective persona
#[derive(Clone)]
pub struct DetectiveAi {
    api_key: Option<String>,
    model: String,
    temperature: f32,
    api_base: String,
    timeout: Duration,
    http: reqwest::Client,
}

impl DetectiveAi {
    pub fn new(api_key: Option<String>, model: &str, temperature: f32, api_base: &str) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: model.to_string(),
            temperature,
            api_base: api_base.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            http: http_client(Duration::from_secs(REQUEST_TIMEOUT_SECS)),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self.http = http_client(timeout);
        self
    }

    pub fn from_config(config: &mut Config) -> Self {
        let api_key = config.get_api_key();
        Self::new(
            api_key,
            &config.model(),
            config.temperature(),
            &config.api_base(),
        )
    }

    /// Whether a key is available; offline clients only ever apologise
    pub fn is_online(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> Result<Url, AssistantError> {
        let base = Url::parse(&self.api_base)?;
        Ok(base.join(&format!("models/{}:generateContent", self.model))?)
    }

    pub(crate) fn build_request(&self, case: &InvestigationCase, question: &str) -> GenerateRequest {
        GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: persona::SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![
                    Part {
                        text: format!("CONTEXT: {}", case_context(case)),
                    },
                    Part {
                        text: format!("USER QUESTION: {}", question),
                    },
                ],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
            },
        }
    }

    async fn generate(
        &self,
        case: &InvestigationCase,
        question: &str,
    ) -> Result<String, AssistantError> {
        let api_key = self.api_key.as_deref().ok_or(AssistantError::NotConfigured)?;
        let url = self.endpoint()?;
        let request = self.build_request(case, question);

        tracing::debug!(case_id = %case.id, model = %self.model, "sending question to Gemini");

        let response = self
            .http
            .post(url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", api_key)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(AssistantError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: GenerateResponse = serde_json::from_str(&text)?;
        Ok(parsed.text())
    }

    /// Ask about a case. Always produces something to show: the model's
    /// reply, or a fallback line in the detective's voice.
    pub async fn analyze_case(&self, case: &InvestigationCase, question: &str) -> String {
        reply_or_fallback(self.generate(case, question).await)
    }

    pub async fn analyze_timeline(&self, case: &InvestigationCase) -> String {
        self.run_quick_prompt(case, &QuickPrompt::Timeline).await
    }

    pub async fn analyze_suspect(&self, case: &InvestigationCase, suspect_id: &str) -> String {
        self.run_quick_prompt(case, &QuickPrompt::Suspect(suspect_id.to_string()))
            .await
    }

    pub async fn challenge_theory(&self, case: &InvestigationCase, theory_id: &str) -> String {
        self.run_quick_prompt(case, &QuickPrompt::Theory(theory_id.to_string()))
            .await
    }

    pub async fn run_quick_prompt(&self, case: &InvestigationCase, prompt: &QuickPrompt) -> String {
        match prompt.question(case) {
            Ok(question) => self.analyze_case(case, &question).await,
            Err(fallback) => fallback.to_string(),
        }
    }
}

fn http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|err| {
            // Requests still carry the timeout individually
            tracing::warn!("Falling back to default HTTP client: {}", err);
            reqwest::Client::new()
        })
}

pub(crate) fn reply_or_fallback(result: Result<String, AssistantError>) -> String {
    match result {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => persona::EMPTY_REPLY.to_string(),
        Err(AssistantError::NotConfigured) => persona::NOT_CONFIGURED.to_string(),
        Err(err) => {
            tracing::error!("Gemini API error: {}", err);
            persona::REQUEST_FAILED.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::mock::mock_cases;

    fn client(key: Option<&str>, base: &str) -> DetectiveAi {
        DetectiveAi::new(
            key.map(str::to_string),
            DEFAULT_MODEL,
            DEFAULT_TEMPERATURE,
            base,
        )
    }

    #[test]
    fn test_request_shape() {
        let case = mock_cases().remove(0);
        let ai = client(Some("k"), DEFAULT_API_BASE);
        let json = serde_json::to_value(ai.build_request(&case, "Who lied?")).unwrap();

        assert_eq!(
            json["systemInstruction"]["parts"][0]["text"],
            persona::SYSTEM_INSTRUCTION
        );
        assert!(json["systemInstruction"].get("role").is_none());
        assert_eq!(json["contents"][0]["role"], "user");
        let parts = json["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert!(parts[0]["text"]
            .as_str()
            .unwrap()
            .starts_with("CONTEXT: CURRENT CASE DATA:\nTitle: Death at Harrowgate Manor"));
        assert_eq!(parts[1]["text"], "USER QUESTION: Who lied?");
        let temperature = json["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_endpoint() {
        let ai = client(Some("k"), DEFAULT_API_BASE);
        assert_eq!(
            ai.endpoint().unwrap().as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
        assert!(matches!(
            client(Some("k"), "not a url").endpoint(),
            Err(AssistantError::Endpoint(_))
        ));
    }

    #[test]
    fn test_response_text_joins_parts() {
        let body = r#"{"candidates": [{"content": {"role": "model", "parts": [{"text": "Well, "}, {"text": "now."}]}}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.text(), "Well, now.");

        let blocked: GenerateResponse = serde_json::from_str(r#"{"promptFeedback": {}}"#).unwrap();
        assert_eq!(blocked.text(), "");
    }

    #[test]
    fn test_reply_or_fallback() {
        assert_eq!(reply_or_fallback(Ok("  raw reply\n".into())), "  raw reply\n");
        assert_eq!(reply_or_fallback(Ok("   ".into())), persona::EMPTY_REPLY);
        assert_eq!(
            reply_or_fallback(Err(AssistantError::NotConfigured)),
            persona::NOT_CONFIGURED
        );
        assert_eq!(
            reply_or_fallback(Err(AssistantError::Api {
                status: 500,
                body: "boom".into()
            })),
            persona::REQUEST_FAILED
        );
    }

    #[test]
    fn test_blank_key_is_offline() {
        assert!(!client(Some("  "), DEFAULT_API_BASE).is_online());
        assert!(!client(None, DEFAULT_API_BASE).is_online());
        assert!(client(Some("key"), DEFAULT_API_BASE).is_online());
    }

    #[tokio::test]
    async fn test_offline_client_apologises() {
        let case = mock_cases().remove(0);
        let ai = client(None, DEFAULT_API_BASE);
        assert_eq!(ai.analyze_case(&case, "anything").await, persona::NOT_CONFIGURED);
        assert_eq!(ai.analyze_timeline(&case).await, persona::NOT_CONFIGURED);
    }

    #[tokio::test]
    async fn test_unknown_quick_prompt_targets_skip_the_request() {
        let case = mock_cases().remove(0);
        let ai = client(None, DEFAULT_API_BASE);
        assert_eq!(ai.analyze_suspect(&case, "ghost").await, persona::UNKNOWN_SUSPECT);
        assert_eq!(ai.challenge_theory(&case, "ghost").await, persona::UNKNOWN_THEORY);
    }

    #[tokio::test]
    async fn test_silent_server_times_out_into_fallback() {
        // Accepts connections and never answers
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let mut held = Vec::new();
            for stream in listener.incoming().flatten() {
                held.push(stream);
            }
        });

        let case = mock_cases().remove(0);
        let ai = client(Some("key"), &format!("http://{}/", addr))
            .with_timeout(Duration::from_millis(500));
        let reply = tokio::time::timeout(Duration::from_secs(10), ai.analyze_case(&case, "hi"))
            .await
            .expect("request should give up on its own");
        assert_eq!(reply, persona::REQUEST_FAILED);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_falls_back() {
        let case = mock_cases().remove(0);
        let ai = client(Some("key"), "http://127.0.0.1:9/");
        assert_eq!(ai.analyze_case(&case, "hello").await, persona::REQUEST_FAILED);
    }
}
