//! Handler for the `tree` command.

use std::fs;

use tracing::{info, warn};

use crate::cli::{output, TreeArgs};
use crate::config::Config;
use crate::domain::{EmvResult, OptionId};
use crate::error::{ConfigError, Result};
use crate::tree::{DecisionTree, DotRenderer, GraphRenderer};

/// Execute the tree command.
pub fn execute(args: &TreeArgs) -> Result<()> {
    let mut config = Config::load_or_default(&args.config)?;

    if let Some(cost) = args.study_cost {
        if cost.is_sign_negative() {
            return Err(ConfigError::InvalidValue {
                field: "study_cost",
                reason: format!("must be non-negative, got {cost}"),
            }
            .into());
        }
        config.with_study.cost = Some(cost);
    }

    // Both pairs must validate before anything derived is produced.
    let without = config.option(OptionId::WithoutStudy)?;
    let with = config.option(OptionId::WithStudy)?;

    let result_without = EmvResult::evaluate(&without);
    let result_with = EmvResult::evaluate(&with);

    let tree = match DecisionTree::build(&without, &with, &result_without, &result_with) {
        Ok(tree) => tree,
        Err(err) => {
            warn!(error = %err, "decision tree construction failed");
            output::error(&format!("no tree produced: {err}"));
            return Err(err.into());
        }
    };

    let dot = DotRenderer::new().render(&tree);

    match &args.output {
        Some(path) => {
            fs::write(path, &dot)?;
            info!(path = %path.display(), "decision tree written");
            output::ok(&format!("decision tree written to {}", path.display()));
        }
        None => print!("{dot}"),
    }

    Ok(())
}
