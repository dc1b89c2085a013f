//! Domain layer: Core business types and logic.
//!
//! This module contains pure Rust types with no external-system knowledge.
//! All types are serializable and implement strict validation.

mod attribution;
mod features;
mod patient;
mod prediction;

pub use attribution::{AttributionError, AttributionResult, FeatureContribution};
pub use features::{feature_legend, FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use patient::{
    Answer, Frequency, Gender, IntakeRecord, PatientAttributes, Transport, ValidationError,
};
pub use prediction::{bmi, BmiCategory, ObesityLevel, PredictionResult, UnknownClassError};
