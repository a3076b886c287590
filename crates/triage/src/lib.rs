pub mod audit;
pub mod config;
pub mod decision;
pub mod error;
pub mod index;
pub mod migrate;
pub mod prompt;
pub mod session;
pub mod sort;

pub use audit::{ActionLog, FileActionLog};
pub use config::{BucketConfig, BucketPaths, Config, ConfigOverrides, FileConfig};
pub use decision::{Bucket, Decision};
pub use error::{Result, TriageError};
pub use index::{list_work_items, ScanOptions, WorkItem};
pub use migrate::{FileSystem, LocalFs, MoveRecord, Mover};
pub use prompt::{Position, Prompter, ScriptedPrompter, TerminalPrompter};
pub use session::Session;
pub use sort::{RunState, RunSummary, SortController, State, Termination};
