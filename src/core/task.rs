//! Task line parsing and serialization.
//!
//! One task per line, following the todo.txt convention:
//!
//! ```text
//! x (A) 2020-07-02 2020-07-01 task description +tag @context due:2020-07-02
//! ```
//!
//! Parsing is total: every line, however malformed, produces a `Task`.
//! Tokens that fail to match their expected shape fall through into the
//! description instead of raising an error.

use std::fmt::Write as _;

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Marker prefix for the synthetic day-separator task.
///
/// A task whose description starts with this token sorts after every
/// other task sharing its due date, so the `quick` view can partition
/// past and upcoming days with a single sort.
pub const SEPARATOR: &str = "+=+=+=+=+=";

// Leading date token, anchored to the start of the remaining line.
static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}")
        .unwrap_or_else(|e| panic!("Invalid date regex: {e}"))
});

// First due:YYYY-MM-DD substring anywhere in the description.
static DUE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"due:[0-9]{4}-[0-9]{2}-[0-9]{2}")
        .unwrap_or_else(|e| panic!("Invalid due-date regex: {e}"))
});

const DATE_LAYOUT: &str = "%Y-%m-%d";

/// One line of the task list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Task {
    /// True if the line began with the `x ` completion marker.
    pub completed: bool,
    /// Single uppercase priority letter, or empty if unset.
    pub priority: String,
    /// Date the task was completed, if one was given.
    pub completion_date: Option<NaiveDate>,
    /// Date the task was created, if one was given.
    pub creation_date: Option<NaiveDate>,
    /// Remaining line content, including tags, contexts, and any
    /// `due:` token verbatim.
    pub description: String,
    /// Due date extracted from the first `due:YYYY-MM-DD` substring.
    pub due_date: Option<NaiveDate>,
    /// Logical-delete marker; deleted tasks are excluded from saved
    /// output but keep their slot in the in-memory list.
    pub deleted: bool,
    /// Hex SHA-256 of the canonical serialized text. Stable external
    /// identifier, independent of position in the list.
    pub hash: String,
}

impl Task {
    /// Render the canonical single-line text form.
    ///
    /// Layout: `[x ][(P) ][COMPLETION ][CREATION ]DESCRIPTION`, with
    /// dates as `{year}-{month:02}-{day:02}`. A separator task keeps
    /// only the first field of its description; the synthetic `due:`
    /// tag it carries exists purely for sort placement.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        if self.completed {
            out.push_str("x ");
        }

        if !self.priority.is_empty() {
            write!(out, "({}) ", self.priority).ok();
        }

        if let Some(date) = self.completion_date {
            write!(out, "{} ", format_date(date)).ok();
        }

        if let Some(date) = self.creation_date {
            write!(out, "{} ", format_date(date)).ok();
        }

        if self.is_separator() {
            out.push_str(
                self.description
                    .split_whitespace()
                    .next()
                    .unwrap_or_default(),
            );
        } else {
            out.push_str(&self.description);
        }

        out
    }

    /// Whether this is a synthetic day-separator task.
    #[must_use]
    pub fn is_separator(&self) -> bool {
        self.description.starts_with(SEPARATOR)
    }

    /// Stamp a creation date onto a freshly added task and refresh the
    /// hash to match the new canonical text.
    pub fn stamp_creation_date(&mut self, date: NaiveDate) {
        self.creation_date = Some(date);
        self.hash = content_hash(&self.to_text());
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Parse one line of raw text into a `Task`.
///
/// Consumes the line strictly left to right: completion marker,
/// priority, up to two leading dates, then the description. A lone
/// leading date is a creation date; completion dates only appear
/// paired with a creation date. Empty input yields a default `Task`
/// whose empty description marks it as "not a real task".
#[must_use]
pub fn parse_task(raw: &str) -> Task {
    let mut task = Task::default();

    if raw.is_empty() {
        return task;
    }

    let mut rest = raw;

    // Completion marker
    if let Some(stripped) = rest.strip_prefix("x ") {
        task.completed = true;
        rest = stripped;
    }

    // Priority: the first field must be exactly "(P)"
    if let Some(token) = rest.split_whitespace().next() {
        if is_priority_token(token) {
            task.priority = token[1..2].to_string();
            rest = consume(rest, token.len());
        }
    }

    // Completion and creation dates, in that order
    for slot in 0..2 {
        if let Some(found) = DATE_PATTERN.find(rest) {
            let date = NaiveDate::parse_from_str(found.as_str(), DATE_LAYOUT).ok();
            rest = consume(rest, found.end());

            if slot == 0 {
                task.completion_date = date;
            } else {
                task.creation_date = date;
            }
        }
    }

    // A lone leading date is a creation date, never a completion date
    if task.creation_date.is_none() && task.completion_date.is_some() {
        task.creation_date = task.completion_date.take();
    }

    task.description = rest.to_string();

    // The due token stays embedded in the description; only the first
    // match governs the due date. An invalid calendar date is silently
    // ignored.
    if let Some(found) = DUE_PATTERN.find(&task.description) {
        let date = &found.as_str()["due:".len()..];
        task.due_date = NaiveDate::parse_from_str(date, DATE_LAYOUT).ok();
    }

    task.deleted = false;
    task.hash = content_hash(&task.to_text());

    task
}

/// Parse a whole file's contents into tasks.
///
/// Normalizes Windows line endings, splits on newlines, and drops
/// blank lines. The resulting order is the canonical task numbering
/// used by every numbered operation.
#[must_use]
pub fn parse_all(contents: &str) -> Vec<Task> {
    contents
        .replace('\r', "")
        .split('\n')
        .map(parse_task)
        .filter(|task| !task.description.is_empty())
        .collect()
}

/// Consume `len` matched bytes plus one trailing space.
///
/// If the byte after the token is not a space but the start of a
/// multibyte character, skipping `len + 1` would land mid-character;
/// fall back to skipping the token alone so the character stays in
/// the description.
fn consume(rest: &str, len: usize) -> &str {
    rest.get(len + 1..)
        .or_else(|| rest.get(len..))
        .unwrap_or("")
}

fn is_priority_token(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() == 3 && bytes[0] == b'(' && bytes[1].is_ascii_uppercase() && bytes[2] == b')'
}

fn format_date(date: NaiveDate) -> String {
    // Month and day are zero-padded; the year prints at natural width
    format!("{}-{:02}-{:02}", date.year(), date.month(), date.day())
}

fn content_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}
