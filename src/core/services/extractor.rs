//! Identifier extraction from recognized text
//!
//! Printed documents group the 12 digits as `XXXX XXXX XXXX`; OCR output
//! sometimes collapses the spaces. The grouped form is tried first.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::Identifier;

static GROUPED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{4}\s[0-9]{4}\s[0-9]{4}").expect("grouped identifier pattern is valid")
});

static CONTIGUOUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{12}").expect("contiguous identifier pattern is valid"));

/// Find the first identifier-shaped digit run in `text`
///
/// Returns `None` when nothing matches; that is an ordinary outcome for a
/// photo of the wrong document.
#[must_use]
pub fn extract(text: &str) -> Option<Identifier> {
    GROUPED
        .find(text)
        .or_else(|| CONTIGUOUS.find(text))
        .and_then(|m| Identifier::parse(m.as_str()).ok())
}
