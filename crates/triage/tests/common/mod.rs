#![allow(dead_code)]

use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};
use triage_lib::{
    ActionLog, BucketPaths, FileSystem, Mover, Result, RunSummary, ScriptedPrompter,
    SortController, TriageError, WorkItem,
};

/// Filesystem stub that tracks which paths exist and every rename asked of it.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    pub files: BTreeSet<PathBuf>,
    pub renames: Vec<(PathBuf, PathBuf)>,
    /// Puts a new file at every rename source, as if one reappeared right
    /// after being moved away.
    pub refill_sources: bool,
}

impl MemoryFs {
    pub fn with_files<I: IntoIterator<Item = PathBuf>>(files: I) -> Self {
        Self {
            files: files.into_iter().collect(),
            renames: Vec::new(),
            refill_sources: false,
        }
    }
}

impl FileSystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains(path)
    }

    fn rename(&mut self, from: &Path, to: &Path) -> io::Result<()> {
        if !self.files.remove(from) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        }
        self.files.insert(to.to_path_buf());
        if self.refill_sources {
            self.files.insert(from.to_path_buf());
        }
        self.renames.push((from.to_path_buf(), to.to_path_buf()));
        Ok(())
    }
}

/// Action log that accepts `fail_after` lines and then reports a write error.
#[derive(Debug, Default)]
pub struct FailingActionLog {
    pub fail_after: usize,
    pub lines: Vec<String>,
}

impl FailingActionLog {
    pub fn new(fail_after: usize) -> Self {
        Self {
            fail_after,
            lines: Vec::new(),
        }
    }
}

impl ActionLog for FailingActionLog {
    fn record(&mut self, command: &str) -> Result<()> {
        if self.lines.len() >= self.fail_after {
            return Err(TriageError::LogFile {
                path: PathBuf::from("/var/log/triage/actions.log"),
                source: io::Error::new(io::ErrorKind::Other, "no space left on device"),
            });
        }
        self.lines.push(command.to_string());
        Ok(())
    }
}

pub fn inbox() -> PathBuf {
    PathBuf::from("/srv/inbox")
}

pub fn work_items(names: &[&str]) -> Vec<WorkItem> {
    names.iter().map(|n| WorkItem::new(*n)).collect()
}

/// Everything observable after a scripted run.
pub struct SessionOutcome {
    pub result: Result<RunSummary>,
    pub log: Vec<String>,
    pub console: String,
    pub prompter: ScriptedPrompter,
    pub fs: MemoryFs,
    pub last_move: Option<triage_lib::MoveRecord>,
}

/// Runs a session over an in-memory inbox holding `items`.
pub fn run_memory_session(items: &[WorkItem], answers: &[&str], dry_run: bool) -> SessionOutcome {
    console::set_colors_enabled(false);

    let work_dir = inbox();
    let buckets = BucketPaths::siblings_of(&work_dir);
    let fs = MemoryFs::with_files(items.iter().map(|i| i.path_in(&work_dir)));

    let mut prompter = ScriptedPrompter::new(answers.iter().copied());
    let mut log: Vec<String> = Vec::new();
    let mut out = Vec::new();

    let mut controller = SortController::new(
        items,
        &work_dir,
        &buckets,
        Mover::new(fs, dry_run),
        &mut prompter,
        &mut log,
        &mut out,
    );

    let result = controller.run();
    let fs = controller.mover().fs().clone();
    let last_move = controller.state().last_move.clone();
    drop(controller);

    SessionOutcome {
        result,
        log,
        console: String::from_utf8(out).expect("console output is UTF-8"),
        prompter,
        fs,
        last_move,
    }
}
