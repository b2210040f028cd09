use tracing_subscriber::EnvFilter;

use crate::error::{AppError, AppResult};

const LOG_ENV: &str = "QA_CHECKLIST_LOG";

/// Installs a stderr subscriber filtered by `QA_CHECKLIST_LOG` (default `info`).
pub fn init_tracing() -> AppResult<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| AppError::Configuration(format!("failed to initialize logging: {err}")))
}
