//! Core domain logic for docverify
//!
//! This module contains the verification logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (requests, identifiers, evidence, verdicts, records)
//! - `services/` - Checks, merging and orchestration
//! - `ports/` - Trait definitions for OCR, inference and record storage
//! - `error` - Pipeline error taxonomy

pub mod error;
pub mod models;
pub mod ports;
pub mod services;
