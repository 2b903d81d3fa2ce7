//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the verification logic and
//! the systems it leans on: an OCR engine, an inference service, and the
//! store that owns the records verdicts are written to.
//!
//! Implementations live in the `adapters` module.

mod inference;
mod ocr;
mod record_store;

#[cfg(test)]
pub use inference::MockInferenceClient;
pub use inference::InferenceClient;
#[cfg(test)]
pub use ocr::MockOcrEngine;
pub use ocr::OcrEngine;
pub use record_store::RecordStore;
