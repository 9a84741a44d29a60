use crate::domain::models::{GameRecord, TimeControlCategory};

use super::types::AggregateResult;

pub const NAME: &str = "time_control_preferences";

/// How games split between increment and fixed-budget time controls. Both
/// labels are always emitted.
pub fn time_control_preferences(records: &[GameRecord]) -> AggregateResult {
    let total = records.len() as u64;

    let counts = TimeControlCategory::ALL
        .iter()
        .map(|category| {
            let count = records
                .iter()
                .filter(|r| r.time_control == *category)
                .count() as u64;
            (category.as_str().to_string(), count)
        })
        .collect();

    AggregateResult::from_counts(NAME, total, counts)
}
