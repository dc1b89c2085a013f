//! # Adiposcan
//!
//! Obesity risk estimation pipeline with explainable predictions.
//!
//! This crate provides:
//! - Encoding of patient lifestyle and biometric attributes into the
//!   fixed-order feature vector the classifier was trained on
//! - Inference against an externally supplied, pre-trained classifier
//! - Per-feature attribution (SHAP-style) of each individual prediction
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core business types (patient attributes, feature vector, obesity levels)
//! - `ports`: Trait definitions for the external artifacts (classifier, explainer, feedback sink)
//! - `adapters`: Concrete implementations (append-only feedback log)
//! - `application`: Use cases orchestrating domain and ports
//!
//! The classifier and explainer are frozen artifacts loaded by the embedder
//! before any request is served; the pipeline invokes them read-only and
//! never trains, fits or mutates them.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub use application::{PipelineService, RiskAssessment};
pub use domain::{
    AttributionResult, FeatureVector, ObesityLevel, PatientAttributes, PredictionResult,
};

/// Result type for Adiposcan operations
pub type Result<T> = std::result::Result<T, AdiposcanError>;

/// Main error type for Adiposcan
#[derive(Debug, thiserror::Error)]
pub enum AdiposcanError {
    #[error("Invalid patient data: {0}")]
    Validation(#[from] domain::ValidationError),

    #[error("Feature arity mismatch: classifier expects {expected} inputs, vector has {actual}")]
    FeatureArity { expected: usize, actual: usize },

    #[error("Classifier invocation failed: {0}")]
    Classifier(#[from] ports::ClassifierError),

    #[error("Prediction decoding failed: {0}")]
    UnknownClass(#[from] domain::UnknownClassError),

    #[error("Attribution failed: {0}")]
    Attribution(#[from] domain::AttributionError),

    #[error("Feedback logging failed: {0}")]
    Feedback(#[from] ports::FeedbackError),
}
