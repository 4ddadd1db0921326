use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::models::{Match, ProblemRecord, Stats, TagSummary};
use crate::schedule;

/// Maximum edits (insert/delete/substitute) tolerated by fuzzy search.
const MAX_EDITS: usize = 2;

/// A topic -> ordered problem names definition, as used by `reset`.
pub type Catalog<'a> = [(&'a str, &'a [&'a str])];

/// Owns every problem record, keyed by name in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProblemStore {
    problems: IndexMap<String, ProblemRecord>,
}

impl ProblemStore {
    pub fn load(problems: IndexMap<String, ProblemRecord>) -> Self {
        debug!(count = problems.len(), "loaded problem store");
        Self { problems }
    }

    pub fn records(&self) -> &IndexMap<String, ProblemRecord> {
        &self.problems
    }

    pub fn get(&self, name: &str) -> Option<&ProblemRecord> {
        self.problems.get(name)
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Exact name, then case-insensitive with `_` read as `-`, then
    /// approximate substring match within two edits.
    pub fn search(&self, query: &str) -> Match {
        if self.problems.contains_key(query) {
            return Match::Found(query.to_string());
        }

        if query.trim().is_empty() {
            return Match::NoMatch;
        }

        let normalized = normalize(query);
        if let Some(name) = self.problems.keys().find(|k| normalize(k) == normalized) {
            return Match::Found(name.clone());
        }

        let pattern: Vec<char> = normalized.chars().collect();
        let mut candidates: Vec<&String> = self
            .problems
            .keys()
            .filter(|k| {
                let text: Vec<char> = k.to_lowercase().chars().collect();
                substring_edit_distance(&pattern, &text) <= MAX_EDITS
            })
            .collect();

        if candidates.is_empty() {
            debug!(query, "no match");
            return Match::NoMatch;
        }

        // Stable sort keeps insertion order between equal lengths
        candidates.sort_by_key(|k| k.chars().count());
        Match::Candidates(candidates.into_iter().cloned().collect())
    }

    /// Resolve user input to a single stored name. One fuzzy candidate is
    /// accepted; several are reported back rather than guessed.
    pub fn resolve(&self, query: &str) -> Result<&str, StoreError> {
        match self.search(query) {
            Match::Found(name) => self.key(&name),
            Match::Candidates(candidates) if candidates.len() == 1 => self.key(&candidates[0]),
            Match::Candidates(candidates) => Err(StoreError::AmbiguousMatch {
                query: query.to_string(),
                candidates,
            }),
            Match::NoMatch => Err(StoreError::NotFound {
                query: query.to_string(),
                candidates: vec![],
            }),
        }
    }

    /// Like `resolve`, but only exact and normalized hits are accepted.
    /// Fuzzy candidates come back in the error for commands that mutate.
    pub fn resolve_strict(&self, query: &str) -> Result<&str, StoreError> {
        match self.search(query) {
            Match::Found(name) => self.key(&name),
            Match::Candidates(candidates) => Err(StoreError::NotFound {
                query: query.to_string(),
                candidates,
            }),
            Match::NoMatch => Err(StoreError::NotFound {
                query: query.to_string(),
                candidates: vec![],
            }),
        }
    }

    fn key(&self, name: &str) -> Result<&str, StoreError> {
        self.problems
            .get_key_value(name)
            .map(|(k, _)| k.as_str())
            .ok_or_else(|| StoreError::NotFound {
                query: name.to_string(),
                candidates: vec![],
            })
    }

    /// Record a completion of `name`. The revisit date is computed from the
    /// count before this completion, so a first completion is due in one day.
    pub fn increment_count(&mut self, name: &str, now: NaiveDateTime) -> Result<u32, StoreError> {
        let Some(record) = self.problems.get_mut(name) else {
            let candidates = match self.search(name) {
                Match::Found(n) => vec![n],
                Match::Candidates(c) => c,
                Match::NoMatch => vec![],
            };
            return Err(StoreError::NotFound {
                query: name.to_string(),
                candidates,
            });
        };

        record.revisit_date = Some(schedule::next_revisit_date(record.count, now.date()));
        record.count = record.count.saturating_add(1);
        record.updated_datetime = now;

        info!(
            problem = name,
            count = record.count,
            revisit = ?record.revisit_date,
            "marked completed"
        );
        Ok(record.count)
    }

    pub fn get_count(&self, query: &str) -> Result<(&str, u32), StoreError> {
        let name = self.resolve(query)?;
        let count = self.problems.get(name).map(|r| r.count).unwrap_or_default();
        Ok((name, count))
    }

    /// Due problems first, then unattempted ones, each in insertion order.
    /// Problems scheduled for a future date are left out.
    pub fn next_problems(
        &self,
        today: NaiveDate,
    ) -> impl Iterator<Item = (&str, &ProblemRecord)> + '_ {
        let due = self
            .problems
            .iter()
            .filter(move |(_, r)| schedule::is_due(r.revisit_date, today));
        let unattempted = self.problems.iter().filter(|(_, r)| r.revisit_date.is_none());

        due.chain(unattempted).map(|(k, r)| (k.as_str(), r))
    }

    /// Returns false (and changes nothing) when the name is already tracked.
    pub fn add_problem(&mut self, name: &str, tag: &str, now: NaiveDateTime) -> bool {
        if self.problems.contains_key(name) {
            info!(problem = name, "already exists, skipping");
            return false;
        }

        self.problems
            .insert(name.to_string(), ProblemRecord::new(name, tag, now));
        info!(problem = name, tag, "added problem");
        true
    }

    /// Recreate every catalog problem from scratch, discarding its history.
    /// Records not named by the catalog are kept.
    pub fn reset(&mut self, catalog: &Catalog<'_>, now: NaiveDateTime) {
        let mut total = 0;
        for (topic, names) in catalog {
            for name in names.iter() {
                self.problems
                    .insert(name.to_string(), ProblemRecord::new(name, topic, now));
                total += 1;
            }
        }
        info!(problems = total, "reset problems to catalog defaults");
    }

    pub fn list(
        &self,
        tag: Option<&str>,
        due_only: bool,
        today: NaiveDate,
    ) -> Vec<(&str, &ProblemRecord)> {
        self.problems
            .iter()
            .filter(|(_, r)| tag.map_or(true, |t| r.tag.eq_ignore_ascii_case(t)))
            .filter(|(_, r)| !due_only || schedule::is_due(r.revisit_date, today))
            .map(|(k, r)| (k.as_str(), r))
            .collect()
    }

    /// Distinct tags in first-seen order.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for record in self.problems.values() {
            if !tags.contains(&record.tag.as_str()) {
                tags.push(&record.tag);
            }
        }
        tags
    }

    pub fn stats(&self, today: NaiveDate) -> Stats {
        let mut stats = Stats {
            total_problems: self.problems.len(),
            ..Default::default()
        };
        let mut by_tag: BTreeMap<&str, TagSummary> = BTreeMap::new();

        for record in self.problems.values() {
            let summary = by_tag.entry(&record.tag).or_insert_with(|| TagSummary {
                tag: record.tag.clone(),
                ..Default::default()
            });
            summary.problems += 1;
            stats.total_completions += u64::from(record.count);

            match record.revisit_date {
                None => stats.unattempted += 1,
                Some(date) => {
                    stats.attempted += 1;
                    summary.attempted += 1;
                    if schedule::is_due(Some(date), today) {
                        stats.due_now += 1;
                    } else {
                        stats.scheduled += 1;
                    }
                }
            }
        }

        stats.tags = by_tag.into_values().collect();
        stats
    }
}

fn normalize(name: &str) -> String {
    name.replace('_', "-").to_lowercase()
}

// Fewest edits turning `pattern` into some substring of `text`.
fn substring_edit_distance(pattern: &[char], text: &[char]) -> usize {
    // A match may start anywhere in the text, so row 0 is all zeros
    let mut prev = vec![0usize; text.len() + 1];
    let mut cur = vec![0usize; text.len() + 1];

    for (i, &p) in pattern.iter().enumerate() {
        cur[0] = i + 1;
        for (j, &t) in text.iter().enumerate() {
            let substitute = prev[j] + usize::from(p != t);
            cur[j + 1] = substitute.min(prev[j + 1] + 1).min(cur[j] + 1);
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    prev.into_iter().min().unwrap_or(pattern.len())
}
