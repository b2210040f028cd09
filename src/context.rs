use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{CodeHostService, IssueTrackerService};

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub issue_tracker: Arc<dyn IssueTrackerService>,
    pub code_host: Arc<dyn CodeHostService>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        issue_tracker: Arc<dyn IssueTrackerService>,
        code_host: Arc<dyn CodeHostService>,
    ) -> Self {
        Self {
            config,
            issue_tracker,
            code_host,
        }
    }
}
