//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement the
//! estimation pipeline.

mod pipeline;

pub use pipeline::{explain, predict, PipelineService, RiskAssessment};
