use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("issue tracker error: {0}")]
    IssueTracker(String),
    #[error("code host error: {0}")]
    CodeHost(String),
}

pub type AppResult<T> = Result<T, AppError>;
