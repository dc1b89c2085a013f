//! Feedback port: Trait for the append-only correctness feedback record.
//!
//! Feedback is a fire-and-forget side channel from the reviewing
//! physician. A sink failure is reported to the caller but never rolls
//! back or invalidates an already-returned prediction.

/// Errors that can occur while appending feedback.
#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error("Feedback I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Feedback serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Trait for the durable feedback destination.
///
/// The destination (file path, queue, database handle) is chosen by the
/// embedder and injected at construction; the pipeline never assumes a
/// deployment layout.
pub trait FeedbackSink: Send + Sync {
    /// Append one feedback entry for a prediction the physician reviewed.
    ///
    /// `correction` carries the free-text correction when the prediction
    /// was judged incorrect.
    ///
    /// # Errors
    /// Returns `FeedbackError` if the entry cannot be written. Callers may
    /// retry at their discretion; the sink itself never does.
    fn append_feedback(
        &self,
        predicted_label: &str,
        was_correct: bool,
        correction: Option<&str>,
    ) -> Result<(), FeedbackError>;
}
