//! docverify - Identity-document verification pipeline
//!
//! Decides whether a photographed identity document is genuine and carries a
//! claimed name. Deterministic checks (Verhoeff checksum, identifier
//! extraction, document markers) run first and cannot be overruled; a
//! language model is consulted only when they all pass.
//!
//! The verification logic lives in [`core`]; OCR, inference and record
//! storage are reached through port traits implemented in [`adapters`].

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
#[cfg(feature = "tokio")]
pub mod dispatch;
pub mod output;
pub mod paths;

pub use crate::core::error::PipelineError;
pub use crate::core::models::{FinalVerdict, VerdictStatus, VerificationRequest};
pub use crate::core::services::Verifier;
