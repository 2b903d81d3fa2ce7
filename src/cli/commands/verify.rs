//! Verify a single document

use std::path::Path;

use docverify::config::Config;
use docverify::core::models::{VerdictStatus, VerificationRequest};
use docverify::output::{OutputMode, VerifyResult};

use super::{build_verifier, read_document};

/// Run the full pipeline on one image
///
/// Exits with status 1 on rejection and 2 on a technical error.
pub fn verify(
    image: &str,
    name: &str,
    config_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = Config::load(config_path)?;
    let verifier = build_verifier(&config)?;

    let request = VerificationRequest::new(read_document(image)?, name);
    let verdict = verifier.verify(&request);
    let status = verdict.status;

    VerifyResult {
        claimed_name: request.claimed_name,
        source: image.to_string(),
        verdict,
    }
    .render(mode);

    match status {
        VerdictStatus::Verified => Ok(()),
        VerdictStatus::Rejected => std::process::exit(1),
        VerdictStatus::Error => std::process::exit(2),
    }
}
