//! Domain models for docverify
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`VerificationRequest`] - "Is this document genuine and does it name this person?"
//! - [`Identifier`] - A 12-digit national identifier lifted from a document
//! - [`Evidence`] - What the deterministic checks found
//! - [`FinalVerdict`] - The answer handed back to the caller
//! - [`VerificationRecord`] - A caller-owned record awaiting a verdict

mod evidence;
mod identifier;
mod record;
mod request;
mod verdict;

pub use evidence::Evidence;
pub use identifier::{IDENTIFIER_LEN, Identifier};
pub use record::{RecordKind, VerificationRecord};
pub use request::{DocumentImage, MAX_CLAIMED_NAME_CHARS, VerificationRequest};
pub use verdict::{FinalVerdict, REJECTION_REMARK, SemanticVerdict, VerdictStatus, VerificationState};
