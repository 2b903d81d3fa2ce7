//! OCR engine port

use crate::core::error::PipelineError;
use crate::core::models::DocumentImage;

/// Converts a document image into plain text
///
/// An empty or garbled result is still `Ok`: poor text is weak evidence, not
/// a failure. Implementations return [`PipelineError::OcrFailure`] when the
/// image cannot be decoded, the engine errors, or the call times out.
#[cfg_attr(test, mockall::automock)]
pub trait OcrEngine: Send + Sync {
    /// Recognize the text on a document
    fn recognize(&self, image: &DocumentImage) -> Result<String, PipelineError>;
}
