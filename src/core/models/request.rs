//! Verification request model

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::core::error::PipelineError;

/// Longest claimed name kept, in characters
pub const MAX_CLAIMED_NAME_CHARS: usize = 256;

/// A document image as handed over by the caller
///
/// Callers store images either as raw bytes, as a bare base64 string, or as
/// a `data:` URL. All three are accepted; decoding is deferred until OCR.
#[derive(Clone, PartialEq, Eq)]
pub enum DocumentImage {
    /// Raw image bytes
    Bytes(Vec<u8>),
    /// Bare base64 text
    Base64(String),
    /// `data:image/...;base64,...`
    DataUrl(String),
}

impl DocumentImage {
    /// Classify textual image input
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let text = text.trim();
        if text.starts_with("data:") {
            Self::DataUrl(text.to_string())
        } else {
            Self::Base64(text.to_string())
        }
    }

    /// Decode into raw image bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, PipelineError> {
        let bytes = match self {
            Self::Bytes(bytes) => bytes.clone(),
            Self::Base64(text) => decode_base64(text)?,
            Self::DataUrl(url) => {
                let (header, payload) = url.split_once(',').ok_or_else(|| {
                    PipelineError::OcrFailure("data URL has no payload".to_string())
                })?;
                if !header.ends_with(";base64") {
                    return Err(PipelineError::OcrFailure(format!(
                        "unsupported data URL encoding: {header}"
                    )));
                }
                decode_base64(payload)?
            },
        };

        if bytes.is_empty() {
            return Err(PipelineError::OcrFailure("image is empty".to_string()));
        }
        Ok(bytes)
    }

    /// Short description for logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bytes(_) => "bytes",
            Self::Base64(_) => "base64",
            Self::DataUrl(_) => "data-url",
        }
    }
}

impl std::fmt::Debug for DocumentImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bytes(b) => write!(f, "DocumentImage::Bytes({} bytes)", b.len()),
            Self::Base64(s) => write!(f, "DocumentImage::Base64({} chars)", s.len()),
            Self::DataUrl(s) => write!(f, "DocumentImage::DataUrl({} chars)", s.len()),
        }
    }
}

fn decode_base64(text: &str) -> Result<Vec<u8>, PipelineError> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| PipelineError::OcrFailure(format!("image could not be decoded: {e}")))
}

/// Input to one verification
#[derive(Debug, Clone)]
pub struct VerificationRequest {
    /// The photographed or scanned document
    pub document: DocumentImage,
    /// Name the submitter claims is on the document
    pub claimed_name: String,
}

impl VerificationRequest {
    /// Create a request, trimming and bounding the claimed name
    #[must_use]
    pub fn new(document: DocumentImage, claimed_name: &str) -> Self {
        Self {
            document,
            claimed_name: claimed_name.trim().chars().take(MAX_CLAIMED_NAME_CHARS).collect(),
        }
    }
}
