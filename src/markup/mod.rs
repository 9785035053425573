use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ── Paragraph formatting ────────────────────────────────────────────────────

/// Wrap `message` in a paragraph with an inline color style.
///
/// Output is always `<p style='color: {color};' >{message}</p>`. Neither input
/// is escaped; callers inserting untrusted text into a live document must
/// sanitize it first.
pub fn format(message: &str, color: &str) -> String {
    format!("<p style='color: {color};' >{message}</p>")
}

/// Red paragraph for error output.
pub fn format_error(message: &str) -> String {
    format(message, Status::Error.color())
}

/// Green paragraph for test/success output.
pub fn format_test(message: &str) -> String {
    format(message, Status::Test.color())
}

// ── Semantic status ─────────────────────────────────────────────────────────

/// Semantic kind of a panel message, each with a fixed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Error,
    #[serde(alias = "success")]
    Test,
}

impl Status {
    pub fn color(self) -> &'static str {
        match self {
            Status::Error => "red",
            Status::Test => "green",
        }
    }

    pub fn render(self, message: &str) -> String {
        match self {
            Status::Error => format_error(message),
            Status::Test => format_test(message),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Error => write!(f, "error"),
            Status::Test => write!(f, "test"),
        }
    }
}

impl FromStr for Status {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(Status::Error),
            "test" | "success" => Ok(Status::Test),
            other => anyhow::bail!(
                "Unknown status '{}'. Use 'error', 'test' or 'success'",
                other
            ),
        }
    }
}
