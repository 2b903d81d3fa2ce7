//! Inspect a document without consulting the model

use std::path::Path;

use docverify::config::Config;
use docverify::core::models::VerificationRequest;
use docverify::output::{InspectResult, OutputMode};

use super::{build_verifier, read_document};

/// Show OCR output, deterministic evidence and the prompt that would be sent
pub fn inspect(
    image: &str,
    name: &str,
    config_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = Config::load(config_path)?;
    let verifier = build_verifier(&config)?;

    let request = VerificationRequest::new(read_document(image)?, name);
    let inspection = verifier.inspect(&request)?;

    InspectResult {
        source: image.to_string(),
        inspection,
    }
    .render(mode);

    Ok(())
}
