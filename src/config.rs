//! Configuration loading and validation.
//!
//! Parameters are loaded from a TOML file into an immutable [`Config`],
//! CLI overrides are applied, and the result is passed by value into the
//! pure computation. There is no shared or mutable configuration state;
//! every run is reproducible from its inputs alone.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

use crate::domain::{DecisionOption, OptionId, Scenario};
use crate::error::{ConfigError, Result, ValidationError};

/// Parameters for one option: two scenarios plus an optional fixed cost.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionConfig {
    /// Units sold in each scenario.
    pub units: [Decimal; 2],
    /// Price per unit in each scenario.
    pub unit_prices: [Decimal; 2],
    /// Probability of each scenario; must sum to 1.0.
    pub probabilities: [Decimal; 2],
    /// Fixed study cost deducted from every scenario's revenue.
    #[serde(default)]
    pub cost: Option<Decimal>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Baseline option, no additional cost.
    #[serde(default = "default_without_study")]
    pub without_study: OptionConfig,

    /// Option that pays for a preliminary study.
    #[serde(default = "default_with_study")]
    pub with_study: OptionConfig,
}

fn default_without_study() -> OptionConfig {
    OptionConfig {
        units: [dec!(100000), dec!(75000)],
        unit_prices: [dec!(550.0), dec!(550.0)],
        probabilities: [dec!(0.6), dec!(0.4)],
        cost: None,
    }
}

fn default_with_study() -> OptionConfig {
    OptionConfig {
        units: [dec!(75000), dec!(70000)],
        unit_prices: [dec!(750.0), dec!(750.0)],
        probabilities: [dec!(0.7), dec!(0.3)],
        cost: Some(dec!(100000.0)),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            without_study: default_without_study(),
            with_study: default_with_study(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file and validate it.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the file cannot be read or parsed,
    /// or when any value is outside its domain.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration, falling back to documented defaults when the
    /// file does not exist.
    ///
    /// A present-but-invalid file is still an error; only absence means
    /// "use the defaults".
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Domain-range checks on every numeric input.
    ///
    /// Probability-sum validation is not done here: that is the option
    /// constructor's invariant, checked independently per option.
    fn validate(&self) -> Result<()> {
        validate_option(&self.without_study, WITHOUT_STUDY_FIELDS)?;
        validate_option(&self.with_study, WITH_STUDY_FIELDS)?;

        if let Some(cost) = self.without_study.cost {
            if !cost.is_zero() {
                return Err(ConfigError::InvalidValue {
                    field: "without_study.cost",
                    reason: format!("the baseline option carries no cost (got {cost})"),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Build the validated domain option for one branch.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ProbabilitySum`] when this branch's
    /// probabilities do not sum to 1.0. Each branch validates
    /// independently of the other.
    pub fn option(&self, id: OptionId) -> std::result::Result<DecisionOption, ValidationError> {
        let params = match id {
            OptionId::WithoutStudy => &self.without_study,
            OptionId::WithStudy => &self.with_study,
        };
        let cost = match id {
            OptionId::WithoutStudy => None,
            OptionId::WithStudy => params.cost,
        };
        DecisionOption::new(
            id,
            Scenario::new(params.units[0], params.unit_prices[0], params.probabilities[0]),
            Scenario::new(params.units[1], params.unit_prices[1], params.probabilities[1]),
            cost,
        )
    }
}

/// Static field names for error messages, one set per section.
struct OptionFields {
    units: &'static str,
    unit_prices: &'static str,
    probabilities: &'static str,
    cost: &'static str,
}

const WITHOUT_STUDY_FIELDS: &OptionFields = &OptionFields {
    units: "without_study.units",
    unit_prices: "without_study.unit_prices",
    probabilities: "without_study.probabilities",
    cost: "without_study.cost",
};

const WITH_STUDY_FIELDS: &OptionFields = &OptionFields {
    units: "with_study.units",
    unit_prices: "with_study.unit_prices",
    probabilities: "with_study.probabilities",
    cost: "with_study.cost",
};

fn validate_option(option: &OptionConfig, fields: &OptionFields) -> Result<()> {
    for value in option.units {
        if value.is_sign_negative() {
            return Err(non_negative(fields.units, value).into());
        }
    }
    for value in option.unit_prices {
        if value.is_sign_negative() {
            return Err(non_negative(fields.unit_prices, value).into());
        }
    }
    for value in option.probabilities {
        if value.is_sign_negative() || value > Decimal::ONE {
            return Err(ConfigError::InvalidValue {
                field: fields.probabilities,
                reason: format!("must be within [0, 1], got {value}"),
            }
            .into());
        }
    }
    if let Some(cost) = option.cost {
        if cost.is_sign_negative() {
            return Err(non_negative(fields.cost, cost).into());
        }
    }
    Ok(())
}

fn non_negative(field: &'static str, value: Decimal) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        reason: format!("must be non-negative, got {value}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_parameters() {
        let config = Config::default();

        assert_eq!(config.without_study.units[0], dec!(100000));
        assert_eq!(config.without_study.unit_prices[0], dec!(550.0));
        assert_eq!(config.without_study.probabilities, [dec!(0.6), dec!(0.4)]);
        assert_eq!(config.with_study.cost, Some(dec!(100000.0)));
    }

    #[test]
    fn empty_toml_falls_back_to_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.with_study.units, [dec!(75000), dec!(70000)]);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn rejects_negative_units() {
        let toml = r#"
[without_study]
units = [-1, 75000]
unit_prices = [550.0, 550.0]
probabilities = [0.6, 0.4]
"#;
        let err = Config::parse_toml(toml).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Config(ConfigError::InvalidValue {
                field: "without_study.units",
                ..
            })
        ));
    }

    #[test]
    fn rejects_probability_above_one() {
        let toml = r#"
[with_study]
units = [75000, 70000]
unit_prices = [750.0, 750.0]
probabilities = [1.1, -0.1]
cost = 100000.0
"#;
        let err = Config::parse_toml(toml).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Config(ConfigError::InvalidValue {
                field: "with_study.probabilities",
                ..
            })
        ));
    }

    #[test]
    fn rejects_cost_on_baseline_option() {
        let toml = r#"
[without_study]
units = [100000, 75000]
unit_prices = [550.0, 550.0]
probabilities = [0.6, 0.4]
cost = 5000.0
"#;
        let err = Config::parse_toml(toml).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Config(ConfigError::InvalidValue {
                field: "without_study.cost",
                ..
            })
        ));
    }

    #[test]
    fn option_builds_validated_branch() {
        let config = Config::default();
        let option = config.option(OptionId::WithStudy).unwrap();

        assert_eq!(option.cost(), Some(dec!(100000.0)));
        assert_eq!(option.scenarios()[0].revenue(), dec!(56250000.0));
    }

    #[test]
    fn invalid_pair_fails_only_its_own_branch() {
        let toml = r#"
[with_study]
units = [75000, 70000]
unit_prices = [750.0, 750.0]
probabilities = [0.5, 0.6]
cost = 100000.0
"#;
        let config = Config::parse_toml(toml).unwrap();

        assert!(config.option(OptionId::WithoutStudy).is_ok());
        assert!(matches!(
            config.option(OptionId::WithStudy),
            Err(ValidationError::ProbabilitySum { .. })
        ));
    }
}
