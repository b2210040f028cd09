pub mod comment;
pub mod issue;
pub mod pull_request;
