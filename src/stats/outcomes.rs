use crate::domain::models::{GameOutcome, GameRecord};

use super::types::AggregateResult;

pub const NAME: &str = "outcome_distribution";

/// Distribution of game results over the cleaned set. All three labels are
/// always emitted, zero counts included; percentages sum to 100 for any
/// non-empty input.
pub fn outcome_distribution(records: &[GameRecord]) -> AggregateResult {
    let total = records.len() as u64;

    let counts = GameOutcome::ALL
        .iter()
        .map(|outcome| {
            let count = records.iter().filter(|r| r.outcome == *outcome).count() as u64;
            (outcome.as_str().to_string(), count)
        })
        .collect();

    AggregateResult::from_counts(NAME, total, counts)
}
