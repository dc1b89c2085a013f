//! Per-feature attribution of a single prediction.
//!
//! Wraps the scores returned by the external explainer into a result
//! aligned position by position with the encoded feature vector.

use serde::Serialize;

use super::features::{FEATURE_COUNT, FEATURE_NAMES};

/// Errors raised while computing an attribution.
///
/// Attribution failure is reported distinctly from prediction failure so
/// a caller can still keep the label when the explanation is unavailable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AttributionError {
    /// The explainer returned a score sequence that does not line up with
    /// the feature vector.
    #[error("Explainer returned {actual} scores for {expected} features")]
    ScoreArity {
        /// Scores required, one per feature
        expected: usize,
        /// Scores actually returned
        actual: usize,
    },

    /// The underlying explainer artifact failed.
    #[error("Explainer invocation failed: {0}")]
    Explainer(String),
}

/// Contribution of a single feature to one prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureContribution {
    /// Display name of the feature (see [`FEATURE_NAMES`])
    pub feature: &'static str,

    /// Attribution score, in the explainer's own sign convention
    /// (positive pushes the prediction toward higher risk)
    pub score: f64,
}

/// Per-feature explanation of one prediction, positionally aligned with
/// the encoded vector that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributionResult {
    contributions: Vec<FeatureContribution>,
}

impl AttributionResult {
    /// Zip explainer scores with the known feature names.
    ///
    /// Scores are passed through verbatim: no renormalization, no sorting,
    /// no filtering. Ordering and sign stay exactly as the explainer
    /// produced them.
    ///
    /// # Errors
    /// Returns `AttributionError::ScoreArity` if the score count differs
    /// from the feature count.
    pub fn from_scores(scores: &[f64]) -> Result<Self, AttributionError> {
        if scores.len() != FEATURE_COUNT {
            return Err(AttributionError::ScoreArity {
                expected: FEATURE_COUNT,
                actual: scores.len(),
            });
        }

        let contributions = FEATURE_NAMES
            .iter()
            .zip(scores.iter())
            .map(|(&name, &score)| FeatureContribution {
                feature: name,
                score,
            })
            .collect();

        Ok(Self { contributions })
    }

    /// Contributions in feature order, one per vector position.
    #[must_use]
    pub fn contributions(&self) -> &[FeatureContribution] {
        &self.contributions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_zip_with_feature_names() {
        let scores: Vec<f64> = (0..FEATURE_COUNT).map(|i| i as f64 * 0.1).collect();
        let result = AttributionResult::from_scores(&scores).expect("Should zip");

        let contributions = result.contributions();
        assert_eq!(contributions.len(), FEATURE_COUNT);
        for (position, contribution) in contributions.iter().enumerate() {
            assert_eq!(contribution.feature, FEATURE_NAMES[position]);
            assert!((contribution.score - position as f64 * 0.1).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_scores_pass_through_verbatim() {
        let mut scores = vec![0.0; FEATURE_COUNT];
        scores[3] = -0.75;
        scores[8] = 1.5;

        let result = AttributionResult::from_scores(&scores).expect("Should zip");
        let contributions = result.contributions();

        // Negative scores and ordering survive untouched.
        assert!((contributions[3].score + 0.75).abs() < f64::EPSILON);
        assert!((contributions[8].score - 1.5).abs() < f64::EPSILON);
        assert_eq!(contributions[3].feature, "Weight");
        assert_eq!(contributions[8].feature, "CAEC");
    }

    #[test]
    fn test_score_arity_mismatch_is_rejected() {
        let err = AttributionResult::from_scores(&[0.1; 9]).expect_err("9 scores for 16 features");
        assert_eq!(
            err,
            AttributionError::ScoreArity {
                expected: FEATURE_COUNT,
                actual: 9,
            }
        );
    }
}
