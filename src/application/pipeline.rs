//! Pipeline service: Orchestrates encoding, inference and attribution.
//!
//! This service coordinates:
//! - Feature encoding with bounds validation
//! - Classifier invocation and class index decoding
//! - Per-feature attribution of the prediction
//! - Feedback recording
//!
//! The classifier and explainer artifacts are loaded once at startup and
//! shared read-only across requests; no request mutates them. Each request
//! runs the strict sequential pipeline encode -> predict -> explain, and
//! both downstream stages receive the exact same encoded vector.

use std::sync::Arc;

use crate::domain::{
    AttributionError, AttributionResult, FeatureVector, PatientAttributes, PredictionResult,
};
use crate::ports::{Classifier, Explainer, FeedbackSink};
use crate::AdiposcanError;

/// Outcome of one pipeline run.
///
/// Attribution failure is partial success: the prediction stands on its
/// own and the attribution error is carried alongside it, never replaced
/// with a fabricated explanation.
#[derive(Debug, Clone)]
pub struct RiskAssessment {
    /// The decoded prediction
    pub prediction: PredictionResult,

    /// Per-feature explanation of the prediction, or the reason it failed
    pub attribution: Result<AttributionResult, AttributionError>,
}

/// Run the classifier on an encoded vector and decode the result.
///
/// # Errors
/// Returns `FeatureArity` on encoder/model arity skew (a configuration
/// error, not a user input problem), `Classifier` if the artifact fails,
/// and `UnknownClass` if the returned index has no label.
pub fn predict<C>(
    features: &FeatureVector,
    classifier: &C,
) -> Result<PredictionResult, AdiposcanError>
where
    C: Classifier + ?Sized,
{
    let expected = classifier.expected_input_arity();
    if features.len() != expected {
        return Err(AdiposcanError::FeatureArity {
            expected,
            actual: features.len(),
        });
    }

    let class_index = classifier.predict(features)?;
    Ok(PredictionResult::from_class_index(class_index)?)
}

/// Compute the per-feature attribution for the exact vector that produced
/// a prediction.
///
/// # Errors
/// Returns `AttributionError` if the explainer fails or returns a score
/// sequence that does not match the feature count.
pub fn explain<E>(
    features: &FeatureVector,
    explainer: &E,
) -> Result<AttributionResult, AttributionError>
where
    E: Explainer + ?Sized,
{
    let scores = explainer.attribute(features)?;
    AttributionResult::from_scores(&scores)
}

/// Service running the full estimation pipeline against frozen artifacts.
pub struct PipelineService<C, E, F>
where
    C: Classifier,
    E: Explainer,
    F: FeedbackSink,
{
    classifier: Arc<C>,
    explainer: Arc<E>,
    feedback: Arc<F>,
}

impl<C, E, F> PipelineService<C, E, F>
where
    C: Classifier,
    E: Explainer,
    F: FeedbackSink,
{
    /// Create a new pipeline service over pre-loaded artifacts.
    pub fn new(classifier: Arc<C>, explainer: Arc<E>, feedback: Arc<F>) -> Self {
        Self {
            classifier,
            explainer,
            feedback,
        }
    }

    /// Run the full pipeline: encode, predict, explain.
    ///
    /// The classifier and the explainer both receive the same encoded
    /// vector, so the label and its explanation always describe the same
    /// attributes snapshot. Deterministic against frozen artifacts.
    ///
    /// # Errors
    /// Returns an error for invalid input or a failed prediction. A failed
    /// attribution is not an error at this level; it is carried in
    /// [`RiskAssessment::attribution`].
    pub fn run_pipeline(
        &self,
        attributes: &PatientAttributes,
    ) -> Result<RiskAssessment, AdiposcanError> {
        tracing::debug!("Encoding patient attributes...");
        let features = attributes.encode()?;

        tracing::debug!("Running classifier...");
        let prediction = predict(&features, self.classifier.as_ref())?;

        tracing::debug!("Computing attribution...");
        let attribution = explain(&features, self.explainer.as_ref());
        if let Err(e) = &attribution {
            tracing::warn!("Attribution failed for this prediction: {e}");
        }

        tracing::info!(
            "Prediction complete: class={}, label={}",
            prediction.class_index,
            prediction.label()
        );

        Ok(RiskAssessment {
            prediction,
            attribution,
        })
    }

    /// Record the reviewing physician's verdict on a prediction.
    ///
    /// # Errors
    /// Returns `Feedback` if the sink cannot append the entry. The
    /// prediction the feedback refers to is unaffected either way.
    pub fn record_feedback(
        &self,
        predicted_label: &str,
        was_correct: bool,
        correction: Option<&str>,
    ) -> Result<(), AdiposcanError> {
        self.feedback
            .append_feedback(predicted_label, was_correct, correction)?;
        tracing::debug!("Feedback recorded for label {predicted_label:?}");
        Ok(())
    }
}
