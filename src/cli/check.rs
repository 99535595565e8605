//! Diagnostic checks.

use std::path::Path;

use crate::cli::output;
use crate::config::Config;
use crate::domain::OptionId;
use crate::error::Result;

/// Validate a configuration file without computing.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    println!("Checking configuration: {}", path.display());

    let config = Config::load(path)?;
    output::ok("configuration file is valid");

    output::section("Summary");
    for id in [OptionId::WithoutStudy, OptionId::WithStudy] {
        match config.option(id) {
            Ok(option) => {
                let pair = option.probabilities();
                output::ok(&format!(
                    "{}: probabilities {} / {}",
                    id.label(),
                    pair.first(),
                    pair.second(),
                ));
            }
            Err(err) => output::warn(&err.to_string()),
        }
    }
    if let Some(cost) = config.with_study.cost {
        output::key_value("study cost", cost);
    }
    output::key_value("log level", &config.logging.level);

    Ok(())
}
