mod config;
mod context;
mod domain;
mod error;
mod infra;
mod logging;
mod services;
mod workflow;

use std::sync::Arc;

use clap::Parser;
use tracing::debug;

use crate::config::{AppConfig, RawArgs, mask_secret};
use crate::context::AppContext;
use crate::domain::issue::TRIGGER_ISSUE_TYPE;
use crate::error::AppResult;
use crate::infra::github::{DEFAULT_API_URL, GitHubClient};
use crate::infra::jira::JiraClient;
use crate::workflow::qa_check::{QaCheckOutcome, run_qa_check};

#[derive(Parser)]
#[command(
    name = "qa-checklist",
    author,
    version,
    about = "Request manual QA on pull requests whose Jira issue is a Story"
)]
struct Cli {
    /// Branch name to scan for a Jira issue key.
    branch: String,
    /// Comma-separated GitHub usernames to mention.
    ping_users: String,
    /// GitHub token used to post the comment.
    token: String,
    /// Jira base URL, e.g. https://company.atlassian.net
    jira_url: String,
    /// Jira username for basic auth.
    jira_username: String,
    /// Jira password or API token for basic auth.
    jira_password: String,
    /// Target repository as owner/repository.
    slug: String,
    /// Pull request number.
    number: u64,
    /// GitHub API base URL.
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    github_api_url: String,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init_tracing()?;

    let config = AppConfig::from_args(RawArgs {
        branch: cli.branch,
        ping_users: cli.ping_users,
        token: cli.token,
        jira_url: cli.jira_url,
        jira_username: cli.jira_username,
        jira_password: cli.jira_password,
        slug: cli.slug,
        number: cli.number,
        github_api_url: cli.github_api_url,
    })?;

    debug!(
        jira_url = %config.jira.base_url,
        jira_username = %config.jira.username,
        jira_password = %mask_secret(&config.jira.password),
        github_api_url = %config.github.api_url,
        github_token = %mask_secret(&config.github.token),
        "loaded configuration"
    );

    let issue_tracker = Arc::new(JiraClient::new(
        config.jira.base_url.clone(),
        config.jira.username.clone(),
        config.jira.password.clone(),
    ));
    let code_host = Arc::new(GitHubClient::new(
        config.github.api_url.clone(),
        config.github.token.clone(),
    ));

    let context = AppContext::new(config, issue_tracker, code_host);

    match run_qa_check(&context).await? {
        QaCheckOutcome::NoIssueFound => {
            println!("Could not extract an issue from branch name, quitting.");
        }
        QaCheckOutcome::NotApplicable { issue, issue_type } => {
            println!(
                "Issue {issue} is a {issue_type}, not a {TRIGGER_ISSUE_TYPE}; no QA check needed."
            );
        }
        QaCheckOutcome::Notified { issue, .. } => {
            println!(
                "Posted QA checklist for {issue} on {}.",
                context.config.target
            );
        }
    }

    Ok(())
}
