//! Evidence gathered by the deterministic checks

use serde::Serialize;

use super::Identifier;

/// What the local checks found in the recognized text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evidence {
    /// Identifier lifted from the text, if any
    pub identifier: Option<Identifier>,
    /// Verhoeff result; `false` when no identifier was found
    pub checksum_valid: bool,
    /// Whether any expected document marker appeared
    pub has_markers: bool,
    /// Whether part of the claimed name appeared; `None` when no name was claimed
    pub name_present: Option<bool>,
}

impl Evidence {
    /// Whether an identifier was extracted at all
    #[must_use]
    pub const fn identifier_found(&self) -> bool {
        self.identifier.is_some()
    }
}
