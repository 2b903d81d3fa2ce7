//! Text heuristics over recognized document text
//!
//! Both checks are cheap and deliberately loose: OCR output is noisy.

/// Words expected somewhere on a genuine document
///
/// Issuing authority, document name and demographic field labels.
pub const DOCUMENT_MARKERS: &[&str] = &[
    "government of india",
    "india",
    "bharat",
    "uidai",
    "aadhaar",
    "unique identification",
    "male",
    "female",
    "dob",
];

/// Name tokens shorter than this are ignored (initials, "al", "de", ...)
pub const MIN_NAME_TOKEN_CHARS: usize = 3;

/// Whether the text carries any expected document marker
///
/// Necessary, not sufficient: absence rejects, presence proves nothing.
#[must_use]
pub fn has_document_markers(text: &str) -> bool {
    let lower = text.to_lowercase();
    DOCUMENT_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Whether any significant token of the claimed name appears in the text
#[must_use]
pub fn name_likely_present(text: &str, claimed_name: &str) -> bool {
    let lower = text.to_lowercase();
    claimed_name
        .to_lowercase()
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_NAME_TOKEN_CHARS)
        .any(|token| lower.contains(token))
}
