use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// The only issue type that asks for a manual QA pass.
pub const TRIGGER_ISSUE_TYPE: &str = "Story";

static ISSUE_KEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z]+-[0-9]+").expect("issue key pattern is valid")
});

/// A tracker reference such as `XP-1023`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueKey(String);

impl IssueKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IssueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns the leftmost issue key embedded in `branch`, if any.
///
/// Project keys are case-sensitive: `xp-1023` is not a reference.
pub fn extract_issue_key(branch: &str) -> Option<IssueKey> {
    ISSUE_KEY_PATTERN
        .find(branch)
        .map(|found| IssueKey(found.as_str().to_string()))
}

pub fn is_trigger_type(issue_type: &str) -> bool {
    issue_type == TRIGGER_ISSUE_TYPE
}
