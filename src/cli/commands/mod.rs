//! Command implementations

mod checksum;
mod config;
mod inspect;
mod records;
mod verify;

use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use docverify::adapters::TesseractOcr;
use docverify::config::Config;
use docverify::core::models::DocumentImage;
use docverify::core::ports::InferenceClient;
use docverify::core::services::Verifier;

pub use checksum::checksum;
pub use config::show_config;
pub use inspect::inspect;
pub use records::records;
pub use verify::verify;

/// Build the pipeline from config
fn build_verifier(config: &Config) -> anyhow::Result<Verifier> {
    let ocr = TesseractOcr::new(&config.ocr.binary, &config.ocr.language, config.ocr_timeout());
    Ok(Verifier::new(Arc::new(ocr), inference_client(config)?, config.pipeline_settings()))
}

#[cfg(feature = "llm")]
fn inference_client(config: &Config) -> anyhow::Result<Arc<dyn InferenceClient>> {
    let client = docverify::adapters::OllamaClient::new(
        &config.inference.base_url,
        &config.inference.model,
        config.inference_timeout(),
    )?;
    Ok(Arc::new(client))
}

#[cfg(not(feature = "llm"))]
fn inference_client(_config: &Config) -> anyhow::Result<Arc<dyn InferenceClient>> {
    Ok(Arc::new(Offline))
}

/// Stand-in inference client for builds without the `llm` feature
#[cfg(not(feature = "llm"))]
#[derive(Debug, Clone, Copy)]
struct Offline;

#[cfg(not(feature = "llm"))]
impl InferenceClient for Offline {
    fn complete(&self, _prompt: &str) -> Result<String, docverify::PipelineError> {
        Err(docverify::PipelineError::InferenceFailure(
            "built without the `llm` feature".to_string(),
        ))
    }

    fn model(&self) -> String {
        "offline".to_string()
    }
}

/// Read a document image from a file, or from stdin when `source` is `-`
///
/// Files holding base64 or a data URL are recognized and decoded later;
/// anything else is treated as raw image bytes.
fn read_document(source: &str) -> anyhow::Result<DocumentImage> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read image from stdin")?;
        return Ok(DocumentImage::from_text(&text));
    }

    read_document_file(Path::new(source))
}

fn read_document_file(path: &Path) -> anyhow::Result<DocumentImage> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let is_encoded = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("b64") || ext.eq_ignore_ascii_case("base64"))
        || bytes.starts_with(b"data:");

    if is_encoded {
        let text = String::from_utf8(bytes)
            .with_context(|| format!("{} is not valid base64 text", path.display()))?;
        Ok(DocumentImage::from_text(&text))
    } else {
        Ok(DocumentImage::Bytes(bytes))
    }
}
