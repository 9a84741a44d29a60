use std::collections::BTreeMap;

use crate::config::settings::PipelineSettings;
use crate::domain::models::GameRecord;

use super::types::{AggregateEntry, AggregateResult};

pub const NAME: &str = "opening_success";

#[derive(Default)]
struct OpeningTally {
    games: u64,
    decisive: u64,
}

/// Success rate of the most played openings.
///
/// A game counts as a success for its opening when it ended decisively for
/// either side, so the published rate is 1 minus the draw rate. The dataset
/// records no side attribution for openings; a side-weighted figure cannot
/// be computed from it.
///
/// Openings are ranked by game count, ties broken by label, and truncated to
/// `opening_top_n` before the rate is computed. Records without a recognized
/// opening label sit this statistic out; `total` is the number of records
/// that carry one.
pub fn opening_success_rates(
    records: &[GameRecord],
    settings: &PipelineSettings,
) -> AggregateResult {
    let mut tallies: BTreeMap<&str, OpeningTally> = BTreeMap::new();

    for record in records {
        let Some(family) = record.opening_family.as_deref() else {
            continue;
        };
        let tally = tallies.entry(family).or_default();
        tally.games += 1;
        if record.outcome.is_decisive() {
            tally.decisive += 1;
        }
    }

    let total: u64 = tallies.values().map(|t| t.games).sum();

    let mut ranked: Vec<(&str, OpeningTally)> = tallies.into_iter().collect();
    ranked.sort_by(|(label_a, tally_a), (label_b, tally_b)| {
        tally_b
            .games
            .cmp(&tally_a.games)
            .then_with(|| label_a.cmp(label_b))
    });
    ranked.truncate(settings.opening_top_n);

    let entries = ranked
        .into_iter()
        .map(|(label, tally)| AggregateEntry {
            label: label.to_string(),
            count: tally.games,
            percentage: Some(tally.decisive as f64 / tally.games as f64 * 100.0),
        })
        .collect();

    AggregateResult::new(NAME, total, entries)
}
