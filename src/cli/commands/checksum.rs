//! Validate an identifier's check digit

use docverify::core::models::Identifier;
use docverify::core::services::checksum::validate_identifier;
use docverify::output::{ChecksumResult, OutputMode};

/// Validate a 12-digit identifier; exits with status 1 when it fails
pub fn checksum(number: &str, mode: OutputMode) -> anyhow::Result<()> {
    let result = match Identifier::parse(number) {
        Ok(id) => ChecksumResult {
            input: number.to_string(),
            well_formed: true,
            valid: validate_identifier(&id),
            error: None,
        },
        Err(e) => ChecksumResult {
            input: number.to_string(),
            well_formed: false,
            valid: false,
            error: Some(e.to_string()),
        },
    };

    result.render(mode);

    if !result.valid {
        std::process::exit(1);
    }
    Ok(())
}
