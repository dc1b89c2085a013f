//! Explainer port: Trait for the pre-fitted attribution engine.
//!
//! This trait abstracts the SHAP-style explainer artifact from the
//! application logic.

use crate::domain::{AttributionError, FeatureVector};

/// Trait for the pre-fitted explainer artifact.
///
/// `attribute` returns one score per input dimension, in the same
/// positional order as the vector. The sign convention is the artifact's
/// own and passes through to callers untouched (positive pushes the
/// prediction toward higher risk).
pub trait Explainer: Send + Sync {
    /// Compute per-feature contribution scores for a single prediction.
    ///
    /// Must be called with the exact vector that produced the prediction
    /// being explained.
    ///
    /// # Errors
    /// Returns `AttributionError::Explainer` if the artifact fails.
    fn attribute(&self, features: &FeatureVector) -> Result<Vec<f64>, AttributionError>;
}
