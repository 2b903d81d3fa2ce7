//! Centralized path definitions for docverify
//!
//! This module provides a single source of truth for all filesystem paths
//! used by docverify.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.config/docverify/
//! └── config.toml               # Collaborator endpoints, timeouts, policy
//!
//! ~/.local/share/docverify/
//! └── records/                  # One JSON file per verification record
//!     ├── REQ-1.json
//!     └── REQ-2.json
//! ```
//!
//! Both roots follow the platform conventions of the `dirs` crate.

use std::path::PathBuf;

/// Application directory name under the config and data roots
const APP_DIR: &str = "docverify";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Records subdirectory
const RECORDS_DIR: &str = "records";

/// Get the config directory.
///
/// Returns `~/.config/docverify/` on Linux.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}

/// Get the default config file path.
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Get the data directory.
///
/// Returns `~/.local/share/docverify/` on Linux.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}

/// Get the default records directory.
#[must_use]
pub fn records_dir() -> PathBuf {
    data_dir().join(RECORDS_DIR)
}
