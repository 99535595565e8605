//! Renderer-agnostic domain logic.

mod advisor;
mod emv;
mod ids;
mod money;
mod option;
mod probability;
mod scenario;

// Core domain types
pub use advisor::Recommendation;
pub use emv::EmvResult;
pub use ids::OptionId;
pub use money::{Money, Probability};
pub use option::DecisionOption;
pub use probability::{ProbabilityPair, SUM_TOLERANCE};
pub use scenario::Scenario;
