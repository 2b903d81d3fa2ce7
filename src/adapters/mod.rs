//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `tesseract` - OCR through the `tesseract` command-line engine
//! - `ollama` - Semantic verification through an Ollama server (feature `llm`)
//! - `file/` - Verification records as JSON files
//! - `memory` - In-process record store

pub mod file;
pub mod memory;
#[cfg(feature = "llm")]
pub mod ollama;
pub mod tesseract;

pub use file::JsonRecordStore;
pub use memory::MemoryRecordStore;
#[cfg(feature = "llm")]
pub use ollama::OllamaClient;
pub use tesseract::TesseractOcr;
