use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::analyzers::risk_score;
use crate::cache::{CacheKey, ExplanationCache};
use crate::explain::Audience;
use crate::models::Flag;
use crate::utils::{Result, ScannerError};

const BACKEND_TIMEOUT: Duration = Duration::from_secs(120);

/// Human-readable explanation of a flag list, with a risk score.
///
/// The score comes from the model when it emits a `Score:` marker, otherwise
/// from the deterministic scorer over the same flags — callers always get one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explanation {
    pub explanation: String,
    pub score: u8,
}

/// Text-generation seam. The requester does not care which backend runs the
/// model; anything that can turn a prompt into text fits here.
#[async_trait]
pub trait TextBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;

    fn name(&self) -> &'static str;
}

/// Backend speaking the Ollama `/api/generate` protocol.
pub struct OllamaBackend {
    http: Client,
    base_url: String,
    model: String,
}

impl OllamaBackend {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(BACKEND_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "failed to build HTTP client with timeout, using default");
                Client::new()
            });

        Self {
            http,
            base_url: base_url.into(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl TextBackend for OllamaBackend {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        tracing::debug!(model = %self.model, "sending prompt to generation backend");

        let response = self.http.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ScannerError::ExplainError(format!(
                "backend returned {}: {}",
                status, body
            )));
        }

        let body: GenerateResponse = response.json().await?;
        Ok(body.response)
    }

    fn name(&self) -> &'static str {
        "ollama"
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Builds audience-keyed prompts, calls the backend, and parses the reply.
pub struct ExplanationRequester {
    backend: Arc<dyn TextBackend>,
    cache: Arc<dyn ExplanationCache>,
}

impl ExplanationRequester {
    pub fn new(backend: Arc<dyn TextBackend>, cache: Arc<dyn ExplanationCache>) -> Self {
        Self { backend, cache }
    }

    /// Explain a flag list for the given audience.
    ///
    /// Backend failures are non-fatal: the result degrades to a
    /// "no explanation available" message with the deterministic score, so
    /// the caller is never left scoreless.
    pub async fn explain(
        &self,
        address: &str,
        flags: &[Flag],
        audience: Audience,
    ) -> Explanation {
        let key = CacheKey::new(address, audience);
        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!(address, audience = %audience, "explanation cache hit");
            return cached;
        }

        let prompt = build_prompt(address, flags, audience);
        let fallback_score = risk_score(flags);

        match self.backend.generate(&prompt).await {
            Ok(response) => {
                let score = parse_score(&response).unwrap_or(fallback_score);
                let explanation = Explanation {
                    explanation: response,
                    score,
                };
                self.cache.put(key, explanation.clone());
                explanation
            }
            Err(e) => {
                tracing::warn!(backend = self.backend.name(), error = %e, "explanation backend failed");
                // Failures are not cached so a later retry can still succeed.
                Explanation {
                    explanation: "No explanation available.".to_string(),
                    score: fallback_score,
                }
            }
        }
    }
}

/// Assemble the prompt: audience preamble, flag list, fixed response format.
pub fn build_prompt(address: &str, flags: &[Flag], audience: Audience) -> String {
    let flag_lines = if flags.is_empty() {
        "- (no red flags detected)".to_string()
    } else {
        flags
            .iter()
            .map(|f| format!("- {}", f.text))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "{preamble}\n\n\
         Contract address: {address}\n\n\
         Detected risk flags:\n{flag_lines}\n\n\
         1. Explain these risks for the reader described above.\n\
         2. Then give a risk score from 0 (extremely risky) to 100 (safe).\n\n\
         Format:\n\
         Explanation:\n\
         ...\n\n\
         Score: <number>",
        preamble = audience.preamble(),
    )
}

/// Extract an optional `Score: <integer>` marker from model output, clamped
/// into [0,100]. Absent or unparsable markers yield `None`.
pub fn parse_score(text: &str) -> Option<u8> {
    let re = Regex::new(r"(?i)Score:\s*(\d+)").expect("static score pattern");
    let captures = re.captures(text)?;
    let value: u32 = captures.get(1)?.as_str().parse().ok()?;
    Some(value.min(100) as u8)
}
