//! Resume enhancement provider and its failure-tolerant wrapper

use crate::config::EnhancementConfig;
use crate::error::{Result, ResumeAnalyserError};
use crate::llm::prompts::{fallback_text, PromptParams, PromptTemplates};
use log::{info, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;

/// Something that can rewrite resume text for a target role.
pub trait EnhancementProvider {
    fn enhance(&self, resume_text: &str, role: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Result of an enhancement request; both variants carry usable text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EnhancementOutcome {
    Enhanced(String),
    Degraded { text: String, reason: String },
}

impl EnhancementOutcome {
    pub fn text(&self) -> &str {
        match self {
            EnhancementOutcome::Enhanced(text) => text,
            EnhancementOutcome::Degraded { text, .. } => text,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, EnhancementOutcome::Degraded { .. })
    }

    /// Fallback rewrite of `resume_text`, recording why the provider was skipped.
    pub fn fallback(resume_text: &str, reason: impl Into<String>) -> Self {
        EnhancementOutcome::Degraded {
            text: fallback_text(resume_text),
            reason: reason.into(),
        }
    }
}

/// Ask `provider` for a rewrite, substituting the fallback text on any failure.
pub async fn enhance_resume<P: EnhancementProvider>(provider: &P, resume_text: &str, role: &str) -> EnhancementOutcome {
    match provider.enhance(resume_text, role).await {
        Ok(text) => EnhancementOutcome::Enhanced(text),
        Err(e) => {
            warn!("Resume enhancement failed, using fallback: {}", e);
            EnhancementOutcome::fallback(resume_text, e.to_string())
        }
    }
}

/// Hugging Face hosted inference API client.
pub struct HuggingFaceProvider {
    client: Client,
    endpoint: String,
    token: Option<String>,
    max_new_tokens: u32,
    temperature: f32,
    templates: PromptTemplates,
}

impl HuggingFaceProvider {
    pub fn new(config: &EnhancementConfig, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ResumeAnalyserError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}/{}", config.api_url.trim_end_matches('/'), config.model),
            token: token.filter(|t| !t.trim().is_empty()),
            max_new_tokens: config.max_new_tokens,
            temperature: config.temperature,
            templates: PromptTemplates::default(),
        })
    }

    /// Read the token from the environment variable named in the config.
    pub fn from_env(config: &EnhancementConfig) -> Result<Self> {
        Self::new(config, std::env::var(&config.token_env).ok())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl EnhancementProvider for HuggingFaceProvider {
    async fn enhance(&self, resume_text: &str, role: &str) -> Result<String> {
        let token = self.token.as_deref().ok_or_else(|| {
            ResumeAnalyserError::Enhancement("API token is not configured".to_string())
        })?;

        let prompt = self.templates.render_enhancement(&PromptParams {
            resume_content: resume_text.to_string(),
            role: role.to_string(),
        });

        let body = json!({
            "inputs": prompt,
            "parameters": {
                "max_new_tokens": self.max_new_tokens,
                "temperature": self.temperature,
                "do_sample": true,
            }
        });

        info!("Requesting resume enhancement from {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ResumeAnalyserError::Enhancement(format!(
                "API error (status {}): {}",
                status.as_u16(),
                message
            )));
        }

        let value: Value = response.json().await?;
        parse_generated_text(&value)
            .ok_or_else(|| ResumeAnalyserError::Enhancement("Response contained no generated text".to_string()))
    }
}

/// Pull the generated text out of the shapes the inference API returns:
/// `[{"generated_text": ..}]`, `{"generated_text": ..}` or a bare string.
pub fn parse_generated_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::Array(items) => items.first().and_then(parse_generated_text),
        Value::Object(map) => map
            .get("generated_text")
            .and_then(Value::as_str)
            .map(str::to_string),
        Value::String(text) => Some(text.clone()),
        _ => None,
    }?;

    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
