//! File adapter: append-only feedback log.
//!
//! Writes one JSON line per feedback entry to an injected path. The
//! destination is always supplied by the caller; nothing here assumes a
//! deployment layout.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::ports::{FeedbackError, FeedbackSink};

/// One recorded feedback entry, as serialized to the log.
#[derive(Debug, Serialize)]
struct FeedbackEntry<'a> {
    recorded_at: chrono::DateTime<chrono::Utc>,
    predicted_label: &'a str,
    was_correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    correction: Option<&'a str>,
}

/// Append-only feedback log backed by a local file.
///
/// Entries are newline-delimited JSON. Existing content is never
/// rewritten; the file is created on first append.
#[derive(Debug, Clone)]
pub struct FileFeedbackLog {
    path: PathBuf,
}

impl FileFeedbackLog {
    /// Create a log writing to the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Destination path of this log.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FeedbackSink for FileFeedbackLog {
    fn append_feedback(
        &self,
        predicted_label: &str,
        was_correct: bool,
        correction: Option<&str>,
    ) -> Result<(), FeedbackError> {
        let entry = FeedbackEntry {
            recorded_at: chrono::Utc::now(),
            predicted_label,
            was_correct,
            correction,
        };
        let line = serde_json::to_string(&entry)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}
