//! Init-config command implementation.

use crate::cli::InitConfigArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the init-config command.
pub fn execute_init_config(args: InitConfigArgs, path: &Path, formatter: &Formatter) -> Result<()> {
    write_default(path, args.force)?;
    println!(
        "{}",
        formatter.success(&format!("Wrote default configuration to {}", path.display()))
    );
    Ok(())
}

fn write_default(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(path)
}
