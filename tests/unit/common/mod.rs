//! Shared test fixtures and helpers
//!
//! Scripted stand-ins for the OCR engine and the inference service, so the
//! pipeline can be driven without tesseract or a model server.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use docverify::PipelineError;
use docverify::core::models::{DocumentImage, VerificationRequest};
use docverify::core::ports::{InferenceClient, OcrEngine};
use docverify::core::services::{InferenceFailurePolicy, PipelineSettings, Verifier};

/// Identifiers with a correct Verhoeff check digit
pub const VALID_IDS: &[&str] = &[
    "234123412346",
    "499187231500",
    "987654321012",
    "123456789010",
    "500000000006",
    "369258147026",
];

/// OCR text of a genuine-looking card for "Asha Rao"
pub const GENUINE_TEXT: &str = "GOVERNMENT OF INDIA\nAsha Rao\nDOB: 01/01/1990\nFEMALE\n2341 2341 2346\nAADHAAR";

/// OCR stub that always returns the same text
#[derive(Debug, Clone)]
pub struct FixedOcr(pub Result<String, PipelineError>);

impl FixedOcr {
    pub fn text(text: &str) -> Self {
        Self(Ok(text.to_string()))
    }

    pub fn failing(message: &str) -> Self {
        Self(Err(PipelineError::OcrFailure(message.to_string())))
    }
}

impl OcrEngine for FixedOcr {
    fn recognize(&self, _image: &DocumentImage) -> Result<String, PipelineError> {
        self.0.clone()
    }
}

/// Inference stub that returns a fixed completion and counts calls
#[derive(Debug)]
pub struct ScriptedModel {
    reply: Result<String, PipelineError>,
    delay: Duration,
    calls: AtomicUsize,
}

impl ScriptedModel {
    pub fn replying(completion: &str) -> Self {
        Self {
            reply: Ok(completion.to_string()),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            reply: Err(PipelineError::InferenceFailure("connection refused".to_string())),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl InferenceClient for ScriptedModel {
    fn complete(&self, _prompt: &str) -> Result<String, PipelineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        self.reply.clone()
    }

    fn model(&self) -> String {
        "scripted".to_string()
    }
}

/// Build a verifier over the stubs
pub fn verifier(ocr: FixedOcr, model: Arc<ScriptedModel>, policy: InferenceFailurePolicy) -> Verifier {
    let settings = PipelineSettings {
        on_inference_failure: policy,
        ..PipelineSettings::default()
    };
    Verifier::new(Arc::new(ocr), model, settings)
}

/// A request for "Asha Rao" with placeholder image bytes
pub fn request() -> VerificationRequest {
    VerificationRequest::new(DocumentImage::Bytes(vec![0x89, 0x50, 0x4e, 0x47]), "Asha Rao")
}

/// Digits of a numeric string
pub fn digits(s: &str) -> Vec<u8> {
    s.bytes().map(|b| b - b'0').collect()
}
