pub mod findings;
pub mod openings;
pub mod outcomes;
pub mod ratings;
pub mod strength;
pub mod timecontrols;
pub mod types;

pub use findings::key_findings;
pub use openings::opening_success_rates;
pub use outcomes::outcome_distribution;
pub use ratings::rating_distribution;
pub use strength::strength_distribution;
pub use timecontrols::time_control_preferences;
pub use types::{AggregateEntry, AggregateResult, AnalysisReport, KeyFindings};
