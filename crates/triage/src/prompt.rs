//! Asking the operator what to do with each file.
//!
//! A [`Prompter`] only ever hands back a decision from the offered set.
//! Anything else the operator types is rejected inside the prompter and the
//! question is asked again.

use crate::decision::Decision;
use crate::error::{Result, TriageError};
use crate::index::WorkItem;
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Input};
use std::collections::VecDeque;
use std::path::Path;

/// Where an item sits in the run, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub index: usize,
    pub total: usize,
}

pub trait Prompter {
    /// Blocks until the operator picks one of `choices` for `item`.
    fn choose(&mut self, item: &WorkItem, position: Position, choices: &[Decision])
        -> Result<Decision>;
}

fn accept(input: &str, choices: &[Decision]) -> Option<Decision> {
    input
        .parse::<Decision>()
        .ok()
        .filter(|decision| choices.contains(decision))
}

/// Interactive prompter on the controlling terminal.
pub struct TerminalPrompter {
    term: Term,
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn choose(
        &mut self,
        item: &WorkItem,
        position: Position,
        choices: &[Decision],
    ) -> Result<Decision> {
        self.term.write_line("")?;
        self.term.write_line(&format!(
            "{} [{}/{}] {}",
            style("→").cyan(),
            position.index + 1,
            position.total,
            style(item.name()).bold()
        ))?;

        let menu = choices
            .iter()
            .map(|d| d.menu_label())
            .collect::<Vec<_>>()
            .join(" ");
        let codes = choices
            .iter()
            .map(|d| d.code().to_string())
            .collect::<Vec<_>>()
            .join("/");
        let allowed = choices.to_vec();

        let mut input = Input::<String>::with_theme(&self.theme).with_prompt(menu);
        if allowed.contains(&Decision::DEFAULT) {
            input = input.default(Decision::DEFAULT.code().to_string());
        }

        let answer = input
            .validate_with(move |answer: &String| -> std::result::Result<(), String> {
                match accept(answer, &allowed) {
                    Some(_) => Ok(()),
                    None => Err(format!("Please answer one of {}", codes)),
                }
            })
            .interact_text_on(&self.term)?;

        accept(&answer, choices)
            .ok_or_else(|| TriageError::UserInput(format!("Unexpected answer: {}", answer)))
    }
}

/// Replays a fixed list of typed answers, for unattended runs and tests.
///
/// Invalid answers are consumed and skipped the same way the terminal
/// prompter re-asks, so they never surface as decisions. Running out of
/// answers is reported as a user input error.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    /// Every `(index, file name)` the prompter was asked about, in order.
    pub asked: Vec<(usize, String)>,
    /// Answers that were turned away.
    pub rejected: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
            rejected: Vec::new(),
        }
    }

    /// One answer per line, as they would have been typed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(Self::new(content.lines().map(str::trim)))
    }

    pub fn from_decisions(decisions: &[Decision]) -> Self {
        Self::new(decisions.iter().map(|d| d.code().to_string()))
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn choose(
        &mut self,
        item: &WorkItem,
        position: Position,
        choices: &[Decision],
    ) -> Result<Decision> {
        self.asked.push((position.index, item.name().to_string()));

        while let Some(answer) = self.answers.pop_front() {
            if answer.trim().is_empty() && choices.contains(&Decision::DEFAULT) {
                return Ok(Decision::DEFAULT);
            }
            match accept(&answer, choices) {
                Some(decision) => return Ok(decision),
                None => self.rejected.push(answer),
            }
        }

        Err(TriageError::UserInput(format!(
            "No answer left for {}",
            item.name()
        )))
    }
}
