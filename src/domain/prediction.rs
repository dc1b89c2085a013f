//! Prediction result types.
//!
//! Represents the decoded output of the obesity level classifier.

use serde::{Deserialize, Serialize};

/// Error raised when the classifier returns a class index outside the
/// label table.
///
/// This indicates a model/label-table version mismatch and is never
/// silently mapped to a default label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Class index {index} has no label (known classes: 0..=6)")]
pub struct UnknownClassError {
    /// The index the classifier returned
    pub index: usize,
}

/// Obesity level classification produced by the trained model.
///
/// Variant order matches the model's class indices exactly; the serialized
/// form matches the training label table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObesityLevel {
    #[serde(rename = "Insufficient Weight")]
    InsufficientWeight,
    #[serde(rename = "Normal Weight")]
    NormalWeight,
    #[serde(rename = "Overweight Level I")]
    OverweightLevelI,
    #[serde(rename = "Overweight Level II")]
    OverweightLevelII,
    #[serde(rename = "Obesity Type I")]
    ObesityTypeI,
    #[serde(rename = "Obesity Type II")]
    ObesityTypeII,
    #[serde(rename = "Obesity Type III")]
    ObesityTypeIII,
}

impl ObesityLevel {
    /// Decode a class index returned by the classifier.
    ///
    /// Direct reverse lookup over the closed index table.
    ///
    /// # Errors
    /// Returns `UnknownClassError` for any index outside `0..=6`.
    pub fn from_class_index(index: usize) -> Result<Self, UnknownClassError> {
        match index {
            0 => Ok(Self::InsufficientWeight),
            1 => Ok(Self::NormalWeight),
            2 => Ok(Self::OverweightLevelI),
            3 => Ok(Self::OverweightLevelII),
            4 => Ok(Self::ObesityTypeI),
            5 => Ok(Self::ObesityTypeII),
            6 => Ok(Self::ObesityTypeIII),
            _ => Err(UnknownClassError { index }),
        }
    }

    /// Class index of this level in the trained model.
    #[must_use]
    pub const fn class_index(self) -> usize {
        match self {
            Self::InsufficientWeight => 0,
            Self::NormalWeight => 1,
            Self::OverweightLevelI => 2,
            Self::OverweightLevelII => 3,
            Self::ObesityTypeI => 4,
            Self::ObesityTypeII => 5,
            Self::ObesityTypeIII => 6,
        }
    }

    /// Human-readable label, exactly as in the training label table.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InsufficientWeight => "Insufficient Weight",
            Self::NormalWeight => "Normal Weight",
            Self::OverweightLevelI => "Overweight Level I",
            Self::OverweightLevelII => "Overweight Level II",
            Self::ObesityTypeI => "Obesity Type I",
            Self::ObesityTypeII => "Obesity Type II",
            Self::ObesityTypeIII => "Obesity Type III",
        }
    }
}

impl std::fmt::Display for ObesityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one classifier invocation, read-only once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Raw class index returned by the classifier
    pub class_index: usize,

    /// Decoded obesity level
    pub level: ObesityLevel,
}

impl PredictionResult {
    /// Decode a raw class index into a prediction result.
    ///
    /// # Errors
    /// Returns `UnknownClassError` for any index outside the label table.
    pub fn from_class_index(index: usize) -> Result<Self, UnknownClassError> {
        let level = ObesityLevel::from_class_index(index)?;
        Ok(Self {
            class_index: index,
            level,
        })
    }

    /// Human-readable label of the predicted level.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.level.label()
    }
}

/// Body-mass index from weight in kilograms and height in centimeters.
///
/// Display-only auxiliary value, never an input to the classifier.
#[must_use]
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Threshold-based BMI bucket shown alongside the model prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    ObesityI,
    ObesityII,
    ObesityIII,
}

impl BmiCategory {
    /// Bucket a BMI value at the 18.5 / 25 / 30 / 35 / 40 thresholds.
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else if bmi < 35.0 {
            Self::ObesityI
        } else if bmi < 40.0 {
            Self::ObesityII
        } else {
            Self::ObesityIII
        }
    }

    /// Get a human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::ObesityI => "Obesity Type I",
            Self::ObesityII => "Obesity Type II",
            Self::ObesityIII => "Obesity Type III",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_class_index_decodes_to_its_label() {
        let labels = [
            "Insufficient Weight",
            "Normal Weight",
            "Overweight Level I",
            "Overweight Level II",
            "Obesity Type I",
            "Obesity Type II",
            "Obesity Type III",
        ];

        for (index, expected) in labels.iter().enumerate() {
            let level = ObesityLevel::from_class_index(index).expect("Known index");
            assert_eq!(level.label(), *expected);
            assert_eq!(level.class_index(), index);
        }
    }

    #[test]
    fn test_unknown_class_index_is_rejected() {
        let err = ObesityLevel::from_class_index(7).expect_err("7 is not a class");
        assert_eq!(err, UnknownClassError { index: 7 });

        assert!(PredictionResult::from_class_index(42).is_err());
    }

    #[test]
    fn test_prediction_result_carries_index_and_label() {
        let result = PredictionResult::from_class_index(4).expect("Known index");
        assert_eq!(result.class_index, 4);
        assert_eq!(result.level, ObesityLevel::ObesityTypeI);
        assert_eq!(result.label(), "Obesity Type I");
    }

    #[test]
    fn test_bmi_converts_height_to_meters() {
        let value = bmi(70.0, 170.0);
        assert!((value - 24.221).abs() < 0.01);
        assert_eq!(BmiCategory::from_bmi(value), BmiCategory::Normal);
    }

    #[test]
    fn test_bmi_bucket_edges() {
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::ObesityI);
        assert_eq!(BmiCategory::from_bmi(35.0), BmiCategory::ObesityII);
        assert_eq!(BmiCategory::from_bmi(40.0), BmiCategory::ObesityIII);
    }
}
