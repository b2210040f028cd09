use async_trait::async_trait;

use crate::domain::pull_request::PullRequestTarget;
use crate::error::AppResult;

#[async_trait]
pub trait CodeHostService: Send + Sync {
    /// Resolves the pull request and posts a new comment on it.
    ///
    /// Every call creates a fresh comment.
    async fn comment_on_pull_request(
        &self,
        target: &PullRequestTarget,
        body: &str,
    ) -> AppResult<()>;
}
