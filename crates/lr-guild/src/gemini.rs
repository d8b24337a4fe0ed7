//! Advisor backed by the Gemini `generateContent` API.

use std::time::Duration;

use lr_core::{Attribute, AttributeScores, Difficulty, QuestProposal};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::advisor::{Advisor, DEFAULT_ADVICE, NO_KEY_ADVICE, SILENT_ADVICE, fallback_proposal};
use crate::config::AdvisorConfig;
use crate::error::{AdvisorError, AdvisorResult};
use crate::prompt;

/// Longest error body kept in [`AdvisorError::Status`].
const MAX_ERROR_BODY: usize = 512;

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

/// Gemini-backed [`Advisor`].
#[derive(Debug, Clone)]
pub struct GeminiAdvisor {
    config: AdvisorConfig,
    http: reqwest::Client,
}

impl GeminiAdvisor {
    /// Create an advisor. Fails only if the HTTP client cannot be built.
    pub fn new(config: AdvisorConfig) -> AdvisorResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, http })
    }

    /// The advisor's configuration.
    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Request suggestions, surfacing every failure.
    pub async fn try_suggest(
        &self,
        level: u32,
        focus: Attribute,
    ) -> AdvisorResult<Vec<QuestProposal>> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt::suggestion_prompt(level, focus) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": prompt::suggestion_schema(),
            }
        });
        let text = self.generate(&body).await?;
        parse_proposals(&text)
    }

    /// Request coaching advice, surfacing every failure.
    pub async fn try_coach(&self, attributes: &AttributeScores) -> AdvisorResult<String> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt::coaching_prompt(attributes) }] }],
        });
        let text = self.generate(&body).await?;
        Ok(text.trim().to_string())
    }

    async fn generate(&self, body: &Value) -> AdvisorResult<String> {
        let key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(AdvisorError::MissingCredentials)?;
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.endpoint, self.config.model
        );
        tracing::debug!(%url, "sending advisor request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let mut cut = MAX_ERROR_BODY;
                while !body.is_char_boundary(cut) {
                    cut -= 1;
                }
                body.truncate(cut);
            }
            return Err(AdvisorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let reply: GenerateResponse = response.json().await?;
        let text = reply.text();
        if text.trim().is_empty() {
            return Err(AdvisorError::EmptyResponse);
        }
        Ok(text)
    }
}

impl Advisor for GeminiAdvisor {
    async fn suggest_challenges(&self, level: u32, focus: Attribute) -> Vec<QuestProposal> {
        match self.try_suggest(level, focus).await {
            Ok(proposals) => {
                tracing::debug!(count = proposals.len(), %focus, "received quest proposals");
                proposals
            }
            Err(AdvisorError::MissingCredentials) => {
                tracing::warn!("no API key configured, offering a manual quest");
                vec![fallback_proposal()]
            }
            Err(AdvisorError::EmptyResponse) => {
                tracing::debug!("advisor returned no text");
                Vec::new()
            }
            Err(e) => {
                tracing::error!("quest suggestion failed: {e}");
                Vec::new()
            }
        }
    }

    async fn coaching_advice(&self, attributes: AttributeScores) -> String {
        match self.try_coach(&attributes).await {
            Ok(advice) => advice,
            Err(AdvisorError::MissingCredentials) => NO_KEY_ADVICE.to_string(),
            Err(AdvisorError::EmptyResponse) => DEFAULT_ADVICE.to_string(),
            Err(e) => {
                tracing::error!("coaching request failed: {e}");
                SILENT_ADVICE.to_string()
            }
        }
    }
}

/// Parse reply text into proposals.
///
/// Accepts a JSON array of quest objects, optionally wrapped in a Markdown
/// code fence or in an object holding the array. Entries that are not
/// objects or lack a text title are dropped; missing descriptions read as
/// empty and unknown difficulties as `Easy`.
pub fn parse_proposals(text: &str) -> AdvisorResult<Vec<QuestProposal>> {
    let value: Value = serde_json::from_str(strip_code_fence(text))?;
    let items = match value {
        Value::Array(items) => items,
        Value::Object(map) => map
            .into_iter()
            .find_map(|(_, v)| match v {
                Value::Array(items) => Some(items),
                _ => None,
            })
            .unwrap_or_default(),
        _ => Vec::new(),
    };
    Ok(items.iter().filter_map(proposal_from_value).collect())
}

fn proposal_from_value(value: &Value) -> Option<QuestProposal> {
    let title = value.get("title")?.as_str()?.trim();
    if title.is_empty() {
        return None;
    }
    let description = value
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim();
    let difficulty = value
        .get("difficulty")
        .and_then(Value::as_str)
        .map(Difficulty::parse_lenient)
        .unwrap_or_default();
    Some(QuestProposal::new(title, description, difficulty))
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}
