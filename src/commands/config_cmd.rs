//! The `sprig config` command.

use crate::config::Config;
use crate::error::{Result, SprigError};
use crate::exit_codes;

/// Show the effective configuration and where it lives, creating the file
/// with defaults when it does not exist yet.
pub fn cmd_config() -> Result<i32> {
    let Some(path) = Config::path() else {
        return Err(SprigError::UserError(
            "could not determine a configuration directory for this platform".to_string(),
        ));
    };

    if !path.exists() {
        Config::default().save_to(&path)?;
        println!("Wrote default configuration to {}", path.display());
    }

    let config = Config::load_from(&path);
    println!("Config file: {}", path.display());
    println!("  assistant:      {}", config.assistant);
    println!(
        "  assistant_args: {}",
        if config.assistant_args.is_empty() {
            "(none)".to_string()
        } else {
            config.assistant_args.join(" ")
        }
    );

    Ok(exit_codes::SUCCESS)
}
