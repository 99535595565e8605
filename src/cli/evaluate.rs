//! Handler for the `evaluate` command.

use serde_json::json;
use tabled::{Table, Tabled};
use tracing::{info, warn};

use crate::cli::{output, EvaluateArgs};
use crate::config::{Config, OptionConfig};
use crate::domain::{DecisionOption, EmvResult, OptionId, Recommendation};
use crate::error::{ConfigError, Result, ValidationError};
use crate::tree::{label, DecisionTree};

#[derive(Tabled)]
struct ScenarioRow {
    #[tabled(rename = "Scenario")]
    scenario: usize,
    #[tabled(rename = "Probability")]
    probability: String,
    #[tabled(rename = "Revenue")]
    revenue: String,
}

#[derive(Tabled)]
struct CostedScenarioRow {
    #[tabled(rename = "Scenario")]
    scenario: usize,
    #[tabled(rename = "Probability")]
    probability: String,
    #[tabled(rename = "Gross revenue")]
    gross: String,
    #[tabled(rename = "Study cost")]
    cost: String,
    #[tabled(rename = "Net revenue")]
    net: String,
}

/// Execute the evaluate command.
pub fn execute(args: &EvaluateArgs) -> Result<()> {
    let mut config = Config::load_or_default(&args.config)?;

    // Apply CLI overrides
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
    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }

    config.init_logging();

    // Each branch validates independently: one bad probability pair must
    // not hide the other option's raw inputs, but any failure halts the
    // comparison.
    let (without, with) = match (
        config.option(OptionId::WithoutStudy),
        config.option(OptionId::WithStudy),
    ) {
        (Ok(without), Ok(with)) => (without, with),
        (without, with) => {
            if !args.json {
                print_parameters(&config);
                println!();
            }
            let mut halt: Option<ValidationError> = None;
            if let Err(err) = without {
                output::error(&err.to_string());
                halt.get_or_insert(err);
            }
            if let Err(err) = with {
                output::error(&err.to_string());
                halt.get_or_insert(err);
            }
            let Some(err) = halt else {
                unreachable!("reached the failure arm with both branches valid")
            };
            return Err(err.into());
        }
    };

    let result_without = EmvResult::evaluate(&without);
    let result_with = EmvResult::evaluate(&with);
    let recommendation = Recommendation::decide(&result_without, &result_with);

    info!(
        emv_without = %result_without.emv(),
        emv_with = %result_with.emv(),
        "EMV computed"
    );
    info!(
        choice = %recommendation.choice(),
        emv = %recommendation.emv(),
        "recommendation decided"
    );

    // Tree assembly failure is non-fatal here: the figures still stand,
    // only the drawing is withheld.
    let tree = DecisionTree::build(&without, &with, &result_without, &result_with);
    if let Err(ref err) = tree {
        warn!(error = %err, "decision tree construction failed");
    }

    if args.json {
        print_json(&result_without, &result_with, &recommendation, tree.is_ok());
        return Ok(());
    }

    print_option(&without, &result_without);
    print_option(&with, &result_with);

    output::section("Recommendation");
    output::recommendation(&format!(
        "Choose {} (EMV {})",
        recommendation.choice().label(),
        label::currency(recommendation.emv()),
    ));
    println!();
    match tree {
        Ok(_) => output::note(&format!(
            "Run {} to export the decision tree.",
            output::highlight("emvcalc tree"),
        )),
        Err(err) => output::warn(&format!("no tree produced: {err}")),
    }

    Ok(())
}

/// Print one option's scenario table and EMV metric.
fn print_option(option: &DecisionOption, result: &EmvResult) {
    output::section(option.id().label());

    let table = match option.cost() {
        Some(cost) => {
            let rows: Vec<CostedScenarioRow> = option
                .scenarios()
                .iter()
                .zip(result.net_revenues())
                .enumerate()
                .map(|(index, (scenario, net))| CostedScenarioRow {
                    scenario: index + 1,
                    probability: format!("{:.2}", scenario.probability()),
                    gross: label::currency(scenario.revenue()),
                    cost: label::currency(cost),
                    net: label::currency(*net),
                })
                .collect();
            Table::new(rows).to_string()
        }
        None => {
            let rows: Vec<ScenarioRow> = option
                .scenarios()
                .iter()
                .enumerate()
                .map(|(index, scenario)| ScenarioRow {
                    scenario: index + 1,
                    probability: format!("{:.2}", scenario.probability()),
                    revenue: label::currency(scenario.revenue()),
                })
                .collect();
            Table::new(rows).to_string()
        }
    };

    for line in table.lines() {
        println!("  {line}");
    }
    println!();
    output::key_value("EMV", label::currency(result.emv()));
}

/// Echo the raw inputs for both options, valid or not.
fn print_parameters(config: &Config) {
    output::section("Parameters");
    print_option_parameters(OptionId::WithoutStudy.label(), &config.without_study);
    print_option_parameters(OptionId::WithStudy.label(), &config.with_study);
}

fn print_option_parameters(title: &str, params: &OptionConfig) {
    println!();
    output::note(title);
    output::key_value("units", format!("{} / {}", params.units[0], params.units[1]));
    output::key_value(
        "unit prices",
        format!("{} / {}", params.unit_prices[0], params.unit_prices[1]),
    );
    output::key_value(
        "probabilities",
        format!("{} / {}", params.probabilities[0], params.probabilities[1]),
    );
    if let Some(cost) = params.cost {
        output::key_value("study cost", cost);
    }
}

/// Emit the machine-readable result document.
fn print_json(
    result_without: &EmvResult,
    result_with: &EmvResult,
    recommendation: &Recommendation,
    tree_available: bool,
) {
    let option_json = |result: &EmvResult| {
        json!({
            "id": result.option_id(),
            "net_revenues": result.net_revenues(),
            "emv": result.emv(),
        })
    };

    let payload = json!({
        "options": [option_json(result_without), option_json(result_with)],
        "recommendation": {
            "choice": recommendation.choice(),
            "emv": recommendation.emv(),
        },
        "tree_available": tree_available,
    });
    println!("{payload}");
}
