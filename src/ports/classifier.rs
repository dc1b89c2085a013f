//! Classifier port: Trait for the pre-trained obesity level model.
//!
//! This trait abstracts the frozen classifier artifact from the
//! application logic. Loading and deserializing the artifact is the
//! embedder's concern.

use crate::domain::FeatureVector;

/// Errors that can occur while invoking the classifier artifact.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClassifierError {
    /// The underlying model evaluation failed.
    #[error("Model evaluation failed: {0}")]
    Evaluation(String),
}

/// Trait for the pre-trained, frozen classifier artifact.
///
/// Implementations must be deterministic: the same vector against the
/// same artifact always yields the same class index. The pipeline never
/// trains, fits or mutates the artifact; it is shared read-only across
/// requests.
pub trait Classifier: Send + Sync {
    /// Number of input features the model was trained on.
    fn expected_input_arity(&self) -> usize;

    /// Predict the obesity class index for an encoded vector.
    ///
    /// # Errors
    /// Returns `ClassifierError::Evaluation` if the model cannot be
    /// evaluated. Failures surface immediately; there is no retry.
    fn predict(&self, features: &FeatureVector) -> Result<usize, ClassifierError>;
}
