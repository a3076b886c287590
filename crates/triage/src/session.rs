//! Startup work done once before the first prompt.

use crate::audit::FileActionLog;
use crate::config::Config;
use crate::error::Result;
use crate::index::{list_work_items, WorkItem};

/// The files to sort and the open action log for one run.
pub struct Session {
    pub items: Vec<WorkItem>,
    pub action_log: FileActionLog,
}

impl Session {
    /// Opens the action log, creates bucket directories (not in dry-run) and
    /// lists the working directory. The action log itself is never listed,
    /// even when it lives inside the working directory.
    pub fn prepare(config: &Config) -> Result<Self> {
        config.ensure_log_directory()?;
        let action_log = FileActionLog::open(&config.log_path)?;

        if !config.dry_run {
            config.ensure_bucket_directories()?;
        }

        let mut scan = config.scan.clone();
        scan.exclude.push(action_log.path().canonicalize()?);

        let items = list_work_items(&config.work_dir, &scan)?;

        Ok(Self { items, action_log })
    }
}
