//! Commit Message Generator
//!
//! Reqwest-based client for OpenAI-compatible Chat Completions, used to turn
//! a git diff into a short commit message. Everything here is blocking; the
//! CLI has no concurrent work to overlap with the request.

use std::{env, time::Duration};

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{ConfigError, GitkitError, Result},
};

const REQUEST_TIMEOUT_SECS: u64 = 60;

const SYSTEM_PROMPT: &str = "\
You are a helpful assistant that writes clear and informative git commit messages.
Guidelines:
 - Start with a concise title (under 50 characters) with no quotes or backticks.
 - Follow the title with a blank line and then a detailed body.
 - The body may include bullet points (each starting with a dash) for key changes.
 - Use present tense, focusing on what and why, not how.
 - Ensure the entire message is under 400 characters.
Examples:
Add user login

- Update authentication service
- Improve error handling for login

Fix header bug

- Correct alignment in header component
- Remove unnecessary styling properties";

/// Produces a commit message for a diff. Mocked in workflow tests so no
/// network traffic happens there.
#[cfg_attr(test, mockall::automock)]
pub trait CommitMessageGenerator {
    /// Generates a commit message for the given diff.
    ///
    /// # Errors
    /// * If the request fails or the model returns no message.
    fn generate(&self, diff: &str) -> Result<String>;
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Client for an OpenAI-compatible Chat Completions endpoint.
pub struct OpenAiGenerator {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl OpenAiGenerator {
    /// Builds the generator from the configuration file. The
    /// `OPENAI_API_KEY` environment variable is only required once a
    /// message is actually generated, so workflows that turn out to have
    /// nothing to commit never need it.
    ///
    /// # Errors
    /// * If the configuration file cannot be read
    /// * If the HTTP client cannot be constructed
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY").ok().filter(|key| !key.is_empty());

        let settings = config.load()?;
        let base_url = normalize_base_url(
            settings
                .api_base_url
                .as_deref()
                .unwrap_or("https://api.openai.com/v1"),
        );
        let model = config.model()?;

        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(OpenAiGenerator {
            http,
            base_url,
            api_key,
            model,
        })
    }
}

impl CommitMessageGenerator for OpenAiGenerator {
    fn generate(&self, diff: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ConfigError::MissingEnv { name: "OPENAI_API_KEY" })?;

        let url = format!("{}/chat/completions", self.base_url);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let bearer = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|_| GitkitError::CommitMessage("invalid API key format".to_string()))?;
        headers.insert(AUTHORIZATION, bearer);

        let user_message = format!("Write a commit message for these changes:\n{diff}");
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &user_message,
                },
            ],
        };

        let response = self.http.post(url).headers(headers).json(&request).send()?;

        if !response.status().is_success() {
            return Err(GitkitError::CommitMessage(format!(
                "API returned {}",
                response.status()
            )));
        }

        let body: ChatResponse = response.json()?;
        let message = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .unwrap_or_default();

        if message.is_empty() {
            return Err(GitkitError::CommitMessage(
                "model returned an empty message".to_string(),
            ));
        }

        Ok(message)
    }
}

/// Normalizes a base URL so it ends with `/v1` exactly once, matching what
/// OpenAI-compatible servers expect.
fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('/');

    if trimmed.ends_with("/v1") || trimmed.contains("/v1/") {
        trimmed.to_string()
    } else {
        format!("{trimmed}/v1")
    }
}
