use tracing::info;

use crate::context::AppContext;
use crate::domain::comment::QaComment;
use crate::domain::issue::{IssueKey, extract_issue_key, is_trigger_type};
use crate::error::AppResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QaCheckOutcome {
    /// The branch name carries no issue reference.
    NoIssueFound,
    /// The issue exists but its type does not ask for manual QA.
    NotApplicable { issue: IssueKey, issue_type: String },
    /// A QA checklist comment was posted on the pull request.
    Notified { issue: IssueKey, issue_type: String },
}

pub async fn run_qa_check(ctx: &AppContext) -> AppResult<QaCheckOutcome> {
    let branch = ctx.config.branch.as_str();
    let issue = extract_issue_key(branch);
    info!(branch, issue = ?issue.as_ref().map(IssueKey::as_str), "inspected branch");

    let Some(issue) = issue else {
        return Ok(QaCheckOutcome::NoIssueFound);
    };

    let issue_type = ctx.issue_tracker.issue_type(&issue).await?;
    info!(issue = %issue, issue_type = %issue_type, "fetched issue type");

    if !is_trigger_type(&issue_type) {
        return Ok(QaCheckOutcome::NotApplicable { issue, issue_type });
    }

    let comment = QaComment::for_issue(&issue, &issue_type, ctx.config.ping_users.clone());
    info!(pull_request = %ctx.config.target, "posting QA checklist");
    ctx.code_host
        .comment_on_pull_request(&ctx.config.target, &comment.render())
        .await?;

    Ok(QaCheckOutcome::Notified { issue, issue_type })
}
