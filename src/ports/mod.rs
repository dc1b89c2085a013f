//! Ports layer: Trait definitions for external artifacts.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the application and the externally supplied model artifacts
//! (classifier, explainer) and the feedback destination.

mod classifier;
mod explainer;
mod feedback;

pub use classifier::{Classifier, ClassifierError};
pub use explainer::Explainer;
pub use feedback::{FeedbackError, FeedbackSink};
