use std::fmt;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestTarget {
    pub owner: String,
    pub repository: String,
    pub number: u64,
}

impl PullRequestTarget {
    /// Builds a target from an `owner/repository` slug, splitting on the first `/`.
    pub fn from_slug(slug: &str, number: u64) -> AppResult<Self> {
        let (owner, repository) = slug.trim().split_once('/').ok_or_else(|| {
            AppError::Configuration(format!("slug '{slug}' must look like owner/repository"))
        })?;

        if owner.is_empty() || repository.is_empty() {
            return Err(AppError::Configuration(format!(
                "slug '{slug}' must name both an owner and a repository"
            )));
        }

        Ok(Self {
            owner: owner.to_string(),
            repository: repository.to_string(),
            number,
        })
    }
}

impl fmt::Display for PullRequestTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}, PR#{}", self.owner, self.repository, self.number)
    }
}
