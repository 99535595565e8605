//! Option identifiers.

use std::fmt;

use serde::Serialize;

/// Identifies one of the two decision branches being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionId {
    /// The baseline option with no additional cost.
    WithoutStudy,
    /// The option that incurs a fixed study cost in every scenario.
    WithStudy,
}

impl OptionId {
    /// Human-readable label for tables and tree nodes.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WithoutStudy => "Option without study",
            Self::WithStudy => "Option with study",
        }
    }

    /// Stable identifier used for node ids and JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WithoutStudy => "without_study",
            Self::WithStudy => "with_study",
        }
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
