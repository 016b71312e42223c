//! GitHub Actions client
//!
//! Lists and deletes workflow runs through the GitHub REST API. Only what
//! the `clear-failed-actions` workflow needs: completed runs, filtered to
//! failures, deleted one by one.

use std::{env, time::Duration};

use chrono::{DateTime, Utc};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;

use crate::errors::{ConfigError, GitkitError, Result};

const API_BASE_URL: &str = "https://api.github.com";
const PER_PAGE: usize = 100;
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Repository coordinates and credentials, read from the environment.
#[derive(Debug, Clone)]
pub struct ActionsConfig {
    pub owner: String,
    pub repo: String,
    pub token: String,
}

impl ActionsConfig {
    /// Reads `GITHUB_ACTIONS_OWNER`, `GITHUB_ACTIONS_REPO` and
    /// `GITHUB_TOKEN`.
    ///
    /// # Errors
    /// * If any of the three variables is unset - a fatal configuration
    ///   error reported before any other work happens.
    pub fn from_env() -> Result<Self> {
        let owner = require_env("GITHUB_ACTIONS_OWNER")?;
        let repo = require_env("GITHUB_ACTIONS_REPO")?;
        let token = require_env("GITHUB_TOKEN")?;

        Ok(ActionsConfig { owner, repo, token })
    }

    /// `owner/repo` form for display.
    #[must_use]
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

fn require_env(name: &'static str) -> Result<String> {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::MissingEnv { name }.into())
}

/// One execution record of a workflow on GitHub Actions.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowRun {
    pub id: u64,
    pub name: Option<String>,
    pub head_branch: Option<String>,
    pub conclusion: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl WorkflowRun {
    /// Workflow name for display, tolerating the API omitting it.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }

    /// Branch name for display.
    #[must_use]
    pub fn display_branch(&self) -> &str {
        self.head_branch.as_deref().unwrap_or("<unknown>")
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.conclusion.as_deref() == Some("failure")
    }
}

#[derive(Deserialize)]
struct WorkflowRunsPage {
    workflow_runs: Vec<WorkflowRun>,
}

/// Seam between the cleanup workflow and the GitHub API, mockable in tests.
#[cfg_attr(test, mockall::automock)]
pub trait ActionsClient {
    /// Lists completed workflow runs whose conclusion is `failure`.
    ///
    /// # Errors
    /// * If a request fails or a page cannot be parsed.
    fn list_failed_runs(&self) -> Result<Vec<WorkflowRun>>;

    /// Deletes one workflow run by identifier.
    ///
    /// # Errors
    /// * If the request fails or the API refuses the deletion.
    fn delete_run(&self, run_id: u64) -> Result<()>;
}

/// Blocking REST client for a single repository.
pub struct GithubClient {
    http: reqwest::blocking::Client,
    base_url: String,
    config: ActionsConfig,
}

impl GithubClient {
    /// Builds the client for the repository named in `config`.
    ///
    /// # Errors
    /// * If the HTTP client cannot be constructed
    /// * If the token is not a valid header value
    pub fn new(config: ActionsConfig) -> Result<Self> {
        Self::with_base_url(config, API_BASE_URL)
    }

    /// Builds the client against a custom API root, used by tests.
    ///
    /// # Errors
    /// * Same conditions as [`GithubClient::new`].
    pub fn with_base_url(config: ActionsConfig, base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("gitkit"));
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| ConfigError::MissingEnv { name: "GITHUB_TOKEN" })?;
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(GithubClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            config,
        })
    }

    fn runs_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/actions/runs",
            self.base_url, self.config.owner, self.config.repo
        )
    }
}

impl ActionsClient for GithubClient {
    fn list_failed_runs(&self) -> Result<Vec<WorkflowRun>> {
        let mut failed = Vec::new();
        let mut page = 1usize;

        loop {
            let query = [
                ("status", "completed".to_string()),
                ("per_page", PER_PAGE.to_string()),
                ("page", page.to_string()),
            ];
            let response = self.http.get(self.runs_url()).query(&query).send()?;

            if !response.status().is_success() {
                return Err(GitkitError::Command(format!(
                    "Failed to list workflow runs: API returned {}",
                    response.status()
                )));
            }

            let body: WorkflowRunsPage = response.json()?;
            let page_len = body.workflow_runs.len();

            failed.extend(body.workflow_runs.into_iter().filter(WorkflowRun::is_failure));

            // A short page means we have seen the last one.
            if page_len < PER_PAGE {
                break;
            }

            page += 1;
        }

        Ok(failed)
    }

    fn delete_run(&self, run_id: u64) -> Result<()> {
        let response = self
            .http
            .delete(format!("{}/{run_id}", self.runs_url()))
            .send()?;

        // The API answers 204 No Content on success.
        if response.status().is_success() {
            Ok(())
        } else {
            Err(GitkitError::Command(format!(
                "Failed to delete workflow run {run_id}: API returned {}",
                response.status()
            )))
        }
    }
}
