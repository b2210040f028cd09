use async_trait::async_trait;

use crate::domain::issue::IssueKey;
use crate::error::AppResult;

#[async_trait]
pub trait IssueTrackerService: Send + Sync {
    /// Returns the type name of the issue, e.g. `Story` or `Bug`.
    async fn issue_type(&self, issue: &IssueKey) -> AppResult<String>;
}
