//! Show the effective configuration

use std::path::Path;

use docverify::config::Config;
use docverify::output::OutputMode;

/// Print the configuration docverify would run with
pub fn show_config(config_path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load(config_path)?;

    match mode {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&config)?),
        OutputMode::Human => {
            print!("{}", config.to_toml()?);
            println!("\n# records: {}", config.records_dir().display());
        },
    }
    Ok(())
}
