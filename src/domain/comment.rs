use crate::domain::issue::IssueKey;

const HEADING: &str = "## QA Check ##";
const CHECKLIST_ITEM: &str = "- [ ] Manual QA required.";

#[derive(Debug, Clone)]
pub struct QaComment {
    pub ping_users: Vec<String>,
    pub reason: String,
}

impl QaComment {
    pub fn new(ping_users: Vec<String>, reason: impl Into<String>) -> Self {
        Self {
            ping_users,
            reason: reason.into(),
        }
    }

    pub fn for_issue(issue: &IssueKey, issue_type: &str, ping_users: Vec<String>) -> Self {
        Self::new(
            ping_users,
            format!("Issue {issue} is of type {issue_type}, so we require manual QA to be done."),
        )
    }

    /// Renders the markdown body posted on the pull request.
    pub fn render(&self) -> String {
        let mentions = self
            .ping_users
            .iter()
            .map(|user| format!("@{user}"))
            .collect::<Vec<_>>()
            .join(", ");

        [
            HEADING.to_string(),
            String::new(),
            self.reason.clone(),
            String::new(),
            CHECKLIST_ITEM.to_string(),
            String::new(),
            format!("cc {mentions}."),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::issue::extract_issue_key;

    #[test]
    fn renders_checklist_body() {
        let comment = QaComment::new(
            vec!["user1".to_string(), "user2".to_string()],
            "Because issue is of type Story.",
        );
        assert_eq!(
            comment.render(),
            "## QA Check ##\n\nBecause issue is of type Story.\n\n- [ ] Manual QA required.\n\ncc @user1, @user2."
        );
    }

    #[test]
    fn builds_reason_from_issue() {
        let issue = extract_issue_key("XP-99").unwrap();
        let comment = QaComment::for_issue(&issue, "Story", vec!["alice".to_string()]);
        assert_eq!(
            comment.reason,
            "Issue XP-99 is of type Story, so we require manual QA to be done."
        );
        assert!(comment.render().ends_with("\n\ncc @alice."));
    }
}
