use crate::domain::pull_request::PullRequestTarget;
use crate::error::AppResult;

#[derive(Clone)]
pub struct AppConfig {
    pub branch: String,
    pub ping_users: Vec<String>,
    pub target: PullRequestTarget,
    pub jira: JiraSettings,
    pub github: GitHubSettings,
}

#[derive(Clone)]
pub struct JiraSettings {
    pub base_url: String,
    pub username: String,
    pub password: String,
}

#[derive(Clone)]
pub struct GitHubSettings {
    pub api_url: String,
    pub token: String,
}

/// Raw values as received on the command line.
pub struct RawArgs {
    pub branch: String,
    pub ping_users: String,
    pub token: String,
    pub jira_url: String,
    pub jira_username: String,
    pub jira_password: String,
    pub slug: String,
    pub number: u64,
    pub github_api_url: String,
}

impl AppConfig {
    pub fn from_args(args: RawArgs) -> AppResult<Self> {
        let target = PullRequestTarget::from_slug(&args.slug, args.number)?;

        Ok(Self {
            branch: args.branch,
            ping_users: parse_ping_users(&args.ping_users),
            target,
            jira: JiraSettings {
                base_url: args.jira_url,
                username: args.jira_username,
                password: args.jira_password,
            },
            github: GitHubSettings {
                api_url: args.github_api_url,
                token: args.token,
            },
        })
    }
}

pub fn parse_ping_users(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|user| !user.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn mask_secret(value: &str) -> String {
    match value.chars().count() {
        0 => "<not set>".to_string(),
        n if n > 6 => {
            let prefix: String = value.chars().take(3).collect();
            let suffix: String = value.chars().skip(n - 3).collect();
            format!("{prefix}***{suffix}")
        }
        _ => "***".to_string(),
    }
}
