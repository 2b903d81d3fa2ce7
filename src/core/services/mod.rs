//! Business logic services
//!
//! Verification logic that operates on domain models. Everything except the
//! orchestrator is a pure function of its inputs; the orchestrator reaches
//! the outside world only through port traits.
//!
//! - [`checksum`] - Verhoeff check-digit validation
//! - [`extractor`] - Find identifiers in recognized text
//! - [`heuristics`] - Document markers and claimed-name matching
//! - [`prompt`] - Build the model prompt and parse its answer
//! - [`merger`] - Combine evidence into a final verdict
//! - [`orchestrator`] - Run the whole pipeline

pub mod checksum;
pub mod extractor;
pub mod heuristics;
pub mod merger;
pub mod orchestrator;
pub mod prompt;

pub use merger::merge;
pub use orchestrator::{
    InferenceFailurePolicy, Inspection, PipelineSettings, Verifier, gather_evidence,
};
