//! Inference service port

use crate::core::error::PipelineError;

/// A text-completion service used for the semantic judgment
///
/// Implementations return [`PipelineError::InferenceFailure`] on transport
/// errors and timeouts. The completion is returned verbatim; parsing it is
/// the pipeline's job.
#[cfg_attr(test, mockall::automock)]
pub trait InferenceClient: Send + Sync {
    /// Complete a prompt
    fn complete(&self, prompt: &str) -> Result<String, PipelineError>;

    /// Model name, for logs and reports
    fn model(&self) -> String;
}
