//! Configuration scaffolding.

use std::fs;

use crate::cli::{output, InitArgs};
use crate::error::{ConfigError, Result};

/// Default config template written by `emvcalc init`.
const CONFIG_TEMPLATE: &str = include_str!("../../config.toml.example");

/// Write a commented default configuration file.
pub fn execute(args: &InitArgs) -> Result<()> {
    if args.path.exists() && !args.force {
        return Err(ConfigError::InvalidValue {
            field: "path",
            reason: format!(
                "{} already exists; pass --force to overwrite",
                args.path.display()
            ),
        }
        .into());
    }

    fs::write(&args.path, CONFIG_TEMPLATE)?;
    output::ok(&format!("wrote {}", args.path.display()));
    output::note("Edit the parameters, then run `emvcalc evaluate`.");

    Ok(())
}
