use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::markup::{self, Status};

/// A single formatted line in the output panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub message: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    pub created_at: DateTime<Local>,
}

impl Entry {
    pub fn new(message: &str, color: &str) -> Self {
        Self {
            message: message.to_string(),
            color: color.to_string(),
            status: None,
            created_at: Local::now(),
        }
    }

    pub fn with_status(message: &str, status: Status) -> Self {
        Self {
            status: Some(status),
            ..Self::new(message, status.color())
        }
    }

    /// Render this entry as a paragraph fragment.
    ///
    /// `color` is what renders; `status` is metadata only.
    pub fn to_html(&self) -> String {
        markup::format(&self.message, &self.color)
    }

    /// JSON view of the entry including its rendered `html`.
    ///
    /// `created_at` is only present when `timestamps` is set.
    pub fn to_json(&self, timestamps: bool) -> serde_json::Value {
        let mut value = serde_json::json!({
            "message": self.message,
            "color": self.color,
            "status": self.status,
            "html": self.to_html(),
        });
        if timestamps {
            value["created_at"] = serde_json::json!(self.created_at);
        }
        value
    }
}

/// Append-only buffer of status messages, rendered in insertion order.
///
/// Holds no locks of its own; share it between producers behind a `Mutex`.
#[derive(Debug, Clone, Default)]
pub struct OutputPanel {
    entries: Vec<Entry>,
}

impl OutputPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: &str, color: &str) -> &Entry {
        self.append(Entry::new(message, color))
    }

    pub fn error(&mut self, message: &str) -> &Entry {
        self.append(Entry::with_status(message, Status::Error))
    }

    pub fn test(&mut self, message: &str) -> &Entry {
        self.append(Entry::with_status(message, Status::Test))
    }

    pub fn append(&mut self, entry: Entry) -> &Entry {
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// Parse every non-blank line of `text` and append it.
    ///
    /// Returns the number of entries added.
    pub fn extend_from_lines(&mut self, text: &str, default_color: &str) -> usize {
        let before = self.entries.len();
        self.entries.extend(
            text.lines()
                .filter(|line| !line.trim().is_empty())
                .map(|line| parse_line(line, default_color)),
        );
        self.entries.len() - before
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Render every entry, one paragraph per line.
    pub fn to_html(&self) -> String {
        self.entries
            .iter()
            .map(Entry::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// ── Tagged line parsing ─────────────────────────────────────────────────────

/// Parse a tagged input line into an entry.
///
/// Recognized forms:
/// - `error: text` — red
/// - `test: text` / `success: text` — green
/// - `[color] text` — explicit color
/// - anything else — `default_color`
pub fn parse_line(line: &str, default_color: &str) -> Entry {
    if let Some((tag, rest)) = line.split_once(':')
        && let Ok(status) = tag.parse::<Status>()
    {
        return Entry::with_status(strip_one_space(rest), status);
    }

    if let Some(rest) = line.strip_prefix('[')
        && let Some((color, body)) = rest.split_once(']')
        && !color.is_empty()
    {
        return Entry::new(strip_one_space(body), color);
    }

    Entry::new(line, default_color)
}

fn strip_one_space(s: &str) -> &str {
    s.strip_prefix(' ').unwrap_or(s)
}
