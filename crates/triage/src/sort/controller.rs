use crate::audit::ActionLog;
use crate::config::BucketPaths;
use crate::decision::{Bucket, Decision};
use crate::error::Result;
use crate::index::WorkItem;
use crate::migrate::{FileSystem, MoveRecord, Mover};
use crate::prompt::{Position, Prompter};
use console::style;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

/// Why a run stopped cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Every file was offered.
    Exhausted,
    /// The operator chose abort.
    Aborted,
    /// The last relocation was reversed.
    Undone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running(usize),
    Terminated(Termination),
}

/// Mutable state of one run. The undo slot holds at most one record.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    pub cursor: usize,
    pub last_move: Option<MoveRecord>,
    pub relocations: BTreeMap<Bucket, usize>,
    pub skipped: usize,
    pub undone: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub termination: Termination,
    /// Cursor position at the stop, reported to the operator as "moved".
    pub processed: usize,
    pub remaining: usize,
    pub total: usize,
    pub relocations: BTreeMap<Bucket, usize>,
    pub skipped: usize,
    pub undone: usize,
}

impl RunSummary {
    pub fn relocated(&self) -> usize {
        self.relocations.values().sum()
    }
}

/// Drives the prompt/move loop over a fixed list of files.
///
/// Any error returned from [`SortController::step`] or [`SortController::run`]
/// is fatal for the run; nothing already moved is put back.
pub struct SortController<'a, P: Prompter, F: FileSystem, L: ActionLog, W: Write> {
    items: &'a [WorkItem],
    work_dir: &'a Path,
    buckets: &'a BucketPaths,
    mover: Mover<F>,
    prompter: &'a mut P,
    log: &'a mut L,
    out: &'a mut W,
    state: RunState,
}

impl<'a, P: Prompter, F: FileSystem, L: ActionLog, W: Write> SortController<'a, P, F, L, W> {
    pub fn new(
        items: &'a [WorkItem],
        work_dir: &'a Path,
        buckets: &'a BucketPaths,
        mover: Mover<F>,
        prompter: &'a mut P,
        log: &'a mut L,
        out: &'a mut W,
    ) -> Self {
        Self {
            items,
            work_dir,
            buckets,
            mover,
            prompter,
            log,
            out,
            state: RunState::default(),
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn mover(&self) -> &Mover<F> {
        &self.mover
    }

    pub fn run(&mut self) -> Result<RunSummary> {
        let mut state = State::Running(0);

        loop {
            match state {
                State::Running(index) => state = self.step(index)?,
                State::Terminated(termination) => return Ok(self.summary(termination)),
            }
        }
    }

    /// Processes the item at `index` and returns the next state.
    pub fn step(&mut self, index: usize) -> Result<State> {
        self.state.cursor = index;
        let total = self.items.len();

        if index >= total {
            writeln!(
                self.out,
                "\n{} All {} files offered",
                style("✓").green(),
                total
            )?;
            self.report_counts(index)?;
            return Ok(State::Terminated(Termination::Exhausted));
        }

        let items = self.items;
        let item = &items[index];
        let decision = self
            .prompter
            .choose(item, Position { index, total }, &Decision::ALL)?;
        log::debug!("{} -> {}", item, decision);

        match decision {
            Decision::Private => self.relocate(index, Bucket::Private),
            Decision::General => self.relocate(index, Bucket::General),
            Decision::Defer => self.relocate(index, Bucket::Defer),
            Decision::Skip => {
                self.state.skipped += 1;
                writeln!(self.out, "  {} Skipped {}", style("·").dim(), item)?;
                Ok(State::Running(index + 1))
            }
            Decision::Abort => {
                writeln!(self.out, "\n{} Aborted", style("✗").yellow())?;
                self.report_counts(index)?;
                Ok(State::Terminated(Termination::Aborted))
            }
            Decision::Undo => self.undo(index),
        }
    }

    fn relocate(&mut self, index: usize, bucket: Bucket) -> Result<State> {
        let items = self.items;
        let item = &items[index];
        let source = item.path_in(self.work_dir);
        let destination = item.path_in(self.buckets.path(bucket));

        let record = self.mover.relocate(&source, &destination)?;
        self.log.record(&record.command_text())?;

        writeln!(
            self.out,
            "  {} {} → {}",
            style("✓").green(),
            item,
            style(bucket).green()
        )?;

        *self.state.relocations.entry(bucket).or_default() += 1;
        self.state.last_move = Some(record);

        Ok(State::Running(index + 1))
    }

    /// Reverses the last relocation and ends the run. With nothing to undo
    /// the same item is asked about again.
    fn undo(&mut self, index: usize) -> Result<State> {
        let Some(record) = self.state.last_move.take() else {
            writeln!(self.out, "  {} Nothing to undo", style("!").yellow())?;
            return Ok(State::Running(index));
        };

        let reversal = self.mover.reverse(&record)?;
        self.log.record(&reversal.command_text())?;
        self.state.undone += 1;

        writeln!(
            self.out,
            "  {} Moved {} back to {}",
            style("↺").yellow(),
            reversal.destination.display(),
            self.work_dir.display()
        )?;

        let rewound = index.saturating_sub(1);
        self.state.cursor = rewound;

        writeln!(self.out, "\n{} Stopped after undo", style("✗").yellow())?;
        self.report_counts(rewound)?;

        Ok(State::Terminated(Termination::Undone))
    }

    fn report_counts(&mut self, processed: usize) -> Result<()> {
        let remaining = self.items.len().saturating_sub(processed);
        writeln!(
            self.out,
            "  {} moved, {} remaining",
            style(processed).bold(),
            style(remaining).bold()
        )?;
        Ok(())
    }

    fn summary(&self, termination: Termination) -> RunSummary {
        let total = self.items.len();
        RunSummary {
            termination,
            processed: self.state.cursor,
            remaining: total.saturating_sub(self.state.cursor),
            total,
            relocations: self.state.relocations.clone(),
            skipped: self.state.skipped,
            undone: self.state.undone,
        }
    }
}
