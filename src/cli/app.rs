//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use docverify::output::OutputMode;

/// docverify - Identity-document verification
#[derive(Parser, Debug)]
#[command(
    name = "docverify",
    version,
    about = "Identity-document verification with checksum-enforced verdicts",
    long_about = "Verify photographed identity documents against a claimed name.\n\n\
                  Deterministic checks (Verhoeff checksum, identifier extraction, document\n\
                  markers) run first and cannot be overruled by the language model."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ~/.config/docverify/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Verify a document image against a claimed name
    Verify {
        /// Image file, or '-' to read base64 / data URL text from stdin
        image: String,

        /// Name the document should carry
        #[arg(short, long)]
        name: String,
    },

    /// Show OCR output and deterministic evidence without asking the model
    Inspect {
        /// Image file, or '-' to read base64 / data URL text from stdin
        image: String,

        /// Name the document should carry
        #[arg(short, long, default_value = "")]
        name: String,
    },

    /// Validate the check digit of a 12-digit identifier
    Checksum {
        /// Identifier, digit groups may be given as separate arguments
        #[arg(required = true, num_args = 1..)]
        number: Vec<String>,
    },

    /// Manage verification records
    Records {
        #[command(subcommand)]
        action: RecordsAction,
    },

    /// Print the effective configuration
    Config,

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum RecordsAction {
    /// Add a pending record
    Add {
        /// Record ID (letters, digits, '-' and '_')
        id: String,

        /// Name the document should carry
        #[arg(short, long)]
        name: String,

        /// Path to the document image
        #[arg(short, long)]
        image: PathBuf,

        /// Record kind: kyc, blood, admin
        #[arg(short, long, default_value = "kyc")]
        kind: String,
    },

    /// List records
    List,

    /// Verify records in the background worker pool and wait for the results
    Verify {
        /// Record IDs (default: every pending record)
        ids: Vec<String>,

        /// Reset the named records to pending first, so decided ones run again
        #[arg(long, requires = "ids")]
        force: bool,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Command::Verify { image, name }) => {
            commands::verify(&image, &name, config_path, output_mode)
        },
        Some(Command::Inspect { image, name }) => {
            commands::inspect(&image, &name, config_path, output_mode)
        },
        Some(Command::Checksum { number }) => commands::checksum(&number.concat(), output_mode),
        Some(Command::Records { action }) => commands::records(action, config_path, output_mode),
        Some(Command::Config) => commands::show_config(config_path, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("docverify v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("docverify v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'docverify --help' for usage");
                println!("Run 'docverify verify <image> --name <name>' to check a document");
            }
            Ok(())
        },
    }
}
