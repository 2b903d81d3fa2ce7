//! Prompt construction and completion parsing for the semantic verifier
//!
//! [`build_prompt`] is a pure function of the evidence; there is no shared
//! template state. [`parse_verdict`] tolerates prose around the JSON object
//! a model returns.

use serde_json::Value;

use crate::core::error::PipelineError;
use crate::core::models::{Identifier, SemanticVerdict};

/// Default cap on recognized-text characters sent to the model
pub const DEFAULT_MAX_TEXT_CHARS: usize = 1500;

/// Placeholder used in the prompt when no identifier was extracted
pub const IDENTIFIER_SENTINEL: &str = "NOT FOUND";

/// Everything the prompt is built from
#[derive(Debug, Clone, Copy)]
pub struct PromptEvidence<'a> {
    /// Raw OCR output
    pub recognized_text: &'a str,
    /// Name the submitter claims
    pub claimed_name: &'a str,
    /// Identifier found by the extractor
    pub identifier: Option<&'a Identifier>,
    /// Verhoeff result
    pub checksum_valid: bool,
    /// Cap on recognized-text characters
    pub max_text_chars: usize,
}

/// Make untrusted text safe to embed between double quotes on one line
#[must_use]
pub fn sanitize(text: &str, max_chars: usize) -> String {
    text.chars()
        .map(|c| match c {
            '"' => '\'',
            '\n' | '\r' => ' ',
            other => other,
        })
        .take(max_chars)
        .collect()
}

/// Build the semantic verification prompt
#[must_use]
pub fn build_prompt(evidence: &PromptEvidence<'_>) -> String {
    let text = sanitize(evidence.recognized_text, evidence.max_text_chars);
    let name = sanitize(evidence.claimed_name, evidence.max_text_chars);
    let identifier = evidence.identifier.map_or(IDENTIFIER_SENTINEL, Identifier::as_str);
    let checksum = if evidence.checksum_valid { "Passed" } else { "Failed" };

    format!(
        r#"You are verifying a scanned national identity card (Aadhaar).

IMPORTANT: Return ONLY a valid JSON object.

EXTRACTED TEXT FROM OCR:
"{text}"

NAME TO MATCH:
"{name}"

IDENTIFIER FOUND BY LOGIC:
"{identifier}"

VERHOEFF CHECKSUM RESULT:
"{checksum}"

Analyze the text. Check whether it looks like a genuine Aadhaar card and whether the name matches.

Return JSON:
{{
    "status": "Verified" or "Rejected",
    "remarks": "reason"
}}
"#
    )
}

/// Parse a model completion into an untrusted verdict
///
/// Takes the span from the first `{` to the last `}` and parses it as a JSON
/// object. A status or remark that is not a string is treated as missing.
pub fn parse_verdict(completion: &str) -> Result<SemanticVerdict, PipelineError> {
    let start = completion.find('{');
    let end = completion.rfind('}');

    let json = match (start, end) {
        (Some(s), Some(e)) if s < e => &completion[s..=e],
        _ => {
            return Err(PipelineError::MalformedVerdict("no JSON object in completion".to_string()));
        },
    };

    let value: Value =
        serde_json::from_str(json).map_err(|e| PipelineError::MalformedVerdict(e.to_string()))?;

    let Value::Object(map) = value else {
        return Err(PipelineError::MalformedVerdict("completion JSON is not an object".to_string()));
    };

    Ok(SemanticVerdict {
        status: map.get("status").and_then(Value::as_str).map(String::from),
        remarks: map.get("remarks").and_then(Value::as_str).map(String::from),
    })
}
