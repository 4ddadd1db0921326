use std::io::{BufRead, Write};

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::store::{Catalog, ProblemStore};

/// A response typed at the practice prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Completed,
    Reset,
    Exit,
    Skip,
}

impl Action {
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "completed" | "c" | "done" => Action::Completed,
            "reset" => Action::Reset,
            "exit" | "q" | "quit" => Action::Exit,
            _ => Action::Skip,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub shown: usize,
    pub completed: usize,
    pub skipped: usize,
    pub reset: bool,
}

/// Walks the practice queue one problem at a time, prompting for each.
pub struct PracticeSession<'a> {
    store: &'a mut ProblemStore,
    catalog: &'a Catalog<'a>,
    now: NaiveDateTime,
}

impl<'a> PracticeSession<'a> {
    pub fn new(store: &'a mut ProblemStore, catalog: &'a Catalog<'a>, now: NaiveDateTime) -> Self {
        Self {
            store,
            catalog,
            now,
        }
    }

    /// `persist` is called after every change to the store.
    pub fn run<R, W, F>(&mut self, mut input: R, mut out: W, mut persist: F) -> Result<SessionSummary>
    where
        R: BufRead,
        W: Write,
        F: FnMut(&ProblemStore) -> Result<()>,
    {
        let mut summary = SessionSummary::default();

        // Snapshot the queue so completions don't reorder it mid-session
        let queue: Vec<String> = self
            .store
            .next_problems(self.now.date())
            .map(|(name, _)| name.to_string())
            .collect();

        if queue.is_empty() {
            writeln!(out, "Nothing due and nothing new. Come back later!")?;
            return Ok(summary);
        }

        for name in queue {
            let Some(record) = self.store.get(&name) else {
                continue;
            };
            summary.shown += 1;

            writeln!(out)?;
            writeln!(out, "{}", name)?;
            writeln!(out, "{}", record.url)?;
            writeln!(out, "Tag: {} | Count: {}", record.tag, record.count)?;
            write!(out, "\nAction (completed/reset/exit): ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                debug!("input closed, ending session");
                break;
            }

            match Action::parse(&line) {
                Action::Completed => {
                    let count = self.store.increment_count(&name, self.now)?;
                    persist(self.store)?;
                    summary.completed += 1;
                    writeln!(out, "✓ Marked as completed! Total count: {}", count)?;
                }
                Action::Reset => {
                    self.store.reset(self.catalog, self.now);
                    persist(self.store)?;
                    summary.reset = true;
                    writeln!(out, "Problems reset to default state.")?;
                    break;
                }
                Action::Exit => break,
                Action::Skip => summary.skipped += 1,
            }
        }

        Ok(summary)
    }
}
