use async_trait::async_trait;
use reqwest::{
    Client, Response,
    header::{ACCEPT, AUTHORIZATION, USER_AGENT},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::pull_request::PullRequestTarget;
use crate::error::{AppError, AppResult};
use crate::services::CodeHostService;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";
const CLIENT_USER_AGENT: &str = concat!("qa-checklist/", env!("CARGO_PKG_VERSION"));

pub struct GitHubClient {
    http: Client,
    api_url: String,
    token: String,
}

impl GitHubClient {
    pub fn new(api_url: String, token: String) -> Self {
        Self {
            http: Client::new(),
            api_url,
            token,
        }
    }

    fn pull_request_endpoint(api_url: &str, target: &PullRequestTarget) -> String {
        format!(
            "{}/repos/{}/{}/pulls/{}",
            api_url.trim_end_matches('/'),
            target.owner,
            target.repository,
            target.number
        )
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, "application/vnd.github+json")
            .header(API_VERSION_HEADER, API_VERSION)
            .header(USER_AGENT, CLIENT_USER_AGENT)
    }

    async fn resolve_pull_request(&self, target: &PullRequestTarget) -> AppResult<PullRequest> {
        let url = Self::pull_request_endpoint(&self.api_url, target);
        debug!(%url, "resolving pull request");

        let response = self
            .authorized(self.http.get(&url))
            .send()
            .await
            .map_err(|err| AppError::CodeHost(format!("failed to call GitHub: {err}")))?;
        let response = ensure_success(response, "resolve pull request").await?;

        response
            .json()
            .await
            .map_err(|err| AppError::CodeHost(format!("failed to parse pull request: {err}")))
    }
}

#[async_trait]
impl CodeHostService for GitHubClient {
    async fn comment_on_pull_request(
        &self,
        target: &PullRequestTarget,
        body: &str,
    ) -> AppResult<()> {
        let pull_request = self.resolve_pull_request(target).await?;
        debug!(url = %pull_request.comments_url, "posting pull request comment");

        let response = self
            .authorized(self.http.post(&pull_request.comments_url))
            .json(&CreateCommentRequest { body })
            .send()
            .await
            .map_err(|err| AppError::CodeHost(format!("failed to call GitHub: {err}")))?;
        ensure_success(response, "create comment").await?;

        Ok(())
    }
}

async fn ensure_success(response: Response, action: &str) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<unable to read response>".to_string());
    Err(AppError::CodeHost(format!(
        "GitHub responded with {status} to {action}: {body}"
    )))
}

#[derive(Deserialize)]
struct PullRequest {
    comments_url: String,
}

#[derive(Serialize)]
struct CreateCommentRequest<'a> {
    body: &'a str,
}
