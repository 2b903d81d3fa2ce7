//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{FinalVerdict, VerdictStatus, VerificationRecord, VerificationState};
use crate::core::services::Inspection;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn colored_status(status: VerdictStatus) -> String {
    match status {
        VerdictStatus::Verified => status.to_string().green().bold().to_string(),
        VerdictStatus::Rejected => status.to_string().red().bold().to_string(),
        VerdictStatus::Error => status.to_string().yellow().bold().to_string(),
    }
}

fn colored_state(state: VerificationState) -> String {
    match state {
        VerificationState::Pending => state.to_string().dimmed().to_string(),
        VerificationState::Verified => colored_status(VerdictStatus::Verified),
        VerificationState::Rejected => colored_status(VerdictStatus::Rejected),
        VerificationState::Error => colored_status(VerdictStatus::Error),
    }
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Result of a verify operation
#[derive(Debug, Serialize)]
pub struct VerifyResult {
    /// Name checked against the document
    pub claimed_name: String,
    /// Where the image came from
    pub source: String,
    /// The verdict
    #[serde(flatten)]
    pub verdict: FinalVerdict,
}

impl VerifyResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("{}: {}", self.source, colored_status(self.verdict.status));
                println!("  Name:    {}", self.claimed_name);
                println!("  Remarks: {}", self.verdict.remarks);
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Result of an inspect operation
#[derive(Debug, Serialize)]
pub struct InspectResult {
    /// Where the image came from
    pub source: String,
    /// OCR output and evidence
    #[serde(flatten)]
    pub inspection: Inspection,
}

impl InspectResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        let evidence = &self.inspection.evidence;
        let yes_no = |b: bool| if b { "yes".green() } else { "no".red() };

        println!("{}", self.source);
        println!(
            "  Identifier: {}",
            evidence.identifier.as_ref().map_or_else(|| "not found".red().to_string(), |id| id.masked())
        );
        println!("  Checksum:   {}", yes_no(evidence.checksum_valid));
        println!("  Markers:    {}", yes_no(evidence.has_markers));
        match evidence.name_present {
            Some(found) => println!("  Name found: {} (advisory)", yes_no(found)),
            None => println!("  Name found: -"),
        }

        if let Some(reason) = &self.inspection.rejection {
            println!("\nWould be rejected before semantic review: {reason}");
        }

        println!("\nRecognized text:\n{}", self.inspection.recognized_text.trim());

        if let Some(prompt) = &self.inspection.prompt {
            println!("\nPrompt:\n{prompt}");
        }
    }
}

/// Result of a checksum operation
#[derive(Debug, Serialize)]
pub struct ChecksumResult {
    /// Identifier as given
    pub input: String,
    /// Whether it is a well-formed 12-digit identifier
    pub well_formed: bool,
    /// Whether its check digit is correct
    pub valid: bool,
    /// Why it is not well-formed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChecksumResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if let Some(error) = &self.error {
                    println!("{}: {}", self.input, error.red());
                } else if self.valid {
                    println!("{}: {}", self.input, "checksum valid".green());
                } else {
                    println!("{}: {}", self.input, "checksum invalid".red());
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Result of a records list operation
#[derive(Debug, Serialize)]
pub struct RecordListResult {
    /// All records
    pub records: Vec<VerificationRecord>,
}

impl RecordListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.records.is_empty() {
            println!("No records.");
            return;
        }

        println!("{:<16} {:<14} {:<10} {:<24} REMARKS", "ID", "KIND", "STATE", "NAME");
        println!("{}", "-".repeat(80));
        for r in &self.records {
            // Pad before coloring; escape codes would throw the columns off
            let pad = " ".repeat(10usize.saturating_sub(r.state.to_string().len()));
            println!(
                "{:<16} {:<14} {}{} {:<24} {}",
                r.id,
                r.kind.to_string(),
                colored_state(r.state),
                pad,
                r.claimed_name,
                r.remarks.as_deref().unwrap_or("-")
            );
        }
    }
}

/// One line of a batch verification report
#[derive(Debug, Serialize)]
pub struct BatchEntry {
    /// Record ID
    pub record_id: String,
    /// Resulting status, if the pipeline ran
    pub status: Option<VerdictStatus>,
    /// Whether the record was updated
    pub applied: bool,
    /// Remark or failure description
    pub detail: String,
}

/// Result of a background batch verification
#[derive(Debug, Serialize)]
pub struct BatchResult {
    /// Per-record outcomes
    pub entries: Vec<BatchEntry>,
    /// Named records left alone because they were already decided
    pub skipped: Vec<String>,
}

impl BatchResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for id in &self.skipped {
                    println!("  [{id}] {} already decided; use --force to re-verify", "skipped".yellow());
                }
                if self.entries.is_empty() {
                    if self.skipped.is_empty() {
                        println!("No pending records.");
                    }
                    return;
                }
                for e in &self.entries {
                    let status = e.status.map_or_else(|| "-".to_string(), colored_status);
                    let note = if e.applied { "" } else { " (not applied)" };
                    println!("  [{}] {}{}: {}", e.record_id, status, note, e.detail);
                }
                let verified = self.entries.iter().filter(|e| e.status == Some(VerdictStatus::Verified)).count();
                println!("\n{verified}/{} verified", self.entries.len());
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
