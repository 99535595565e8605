//! emvcalc - Expected monetary value decision calculator.
//!
//! This crate compares two mutually exclusive business options under
//! uncertainty, each with two discrete outcome scenarios. The baseline
//! option carries no extra cost; the alternative pays a fixed study cost
//! that is deducted from every scenario's revenue before weighting by
//! probability. The option with the higher EMV wins, and the decision can
//! be exported as a two-level tree for any graph renderer.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files with documented defaults
//! - [`domain`] - Scenarios, options, probability validation, EMV, recommendation
//! - [`tree`] - Decision-tree description and the DOT renderer behind [`tree::GraphRenderer`]
//! - [`error`] - Error types for the crate
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```
//! use emvcalc::config::Config;
//! use emvcalc::domain::{EmvResult, OptionId, Recommendation};
//!
//! let config = Config::default();
//! let without = config.option(OptionId::WithoutStudy).unwrap();
//! let with = config.option(OptionId::WithStudy).unwrap();
//!
//! let recommendation = Recommendation::decide(
//!     &EmvResult::evaluate(&without),
//!     &EmvResult::evaluate(&with),
//! );
//! assert_eq!(recommendation.choice(), OptionId::WithStudy);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod tree;
