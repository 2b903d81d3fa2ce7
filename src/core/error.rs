//! Pipeline error taxonomy
//!
//! Every failure a verification can meet is named here. None of these escape
//! the orchestrator: each one is mapped to a caller-visible
//! [`VerdictStatus`](crate::core::models::VerdictStatus).

use thiserror::Error;

/// Errors raised while verifying a document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// No identifier pattern matched the recognized text
    #[error("no identifier found in recognized text")]
    NotFound,

    /// An identifier was found but its check digit is wrong
    #[error("identifier failed checksum validation")]
    ChecksumFailed,

    /// None of the expected document markers were present
    #[error("no document markers found in recognized text")]
    MarkersAbsent,

    /// The inference service could not be reached or did not answer in time
    #[error("inference service failed: {0}")]
    InferenceFailure(String),

    /// The inference service answered with something that is not a verdict
    #[error("malformed verdict: {0}")]
    MalformedVerdict(String),

    /// The OCR engine could not read the image
    #[error("OCR failed: {0}")]
    OcrFailure(String),

    /// A stage panicked; the payload message is kept
    #[error("verification aborted: {0}")]
    Aborted(String),
}

impl PipelineError {
    /// Whether this error is inconclusive about the document itself
    ///
    /// Collaborator failures say nothing about authenticity and surface as
    /// `Error`; the rest are evidence against the document.
    #[must_use]
    pub const fn is_technical(&self) -> bool {
        matches!(self, Self::InferenceFailure(_) | Self::OcrFailure(_) | Self::Aborted(_))
    }
}

/// Rejected input to [`Identifier::parse`](crate::core::models::Identifier::parse)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// Wrong number of digits
    #[error("identifier must have 12 digits, got {0}")]
    Length(usize),

    /// Something other than an ASCII digit
    #[error("identifier contains non-digit character {0:?}")]
    NonDigit(char),
}
