use serde::Serialize;

/// One labeled row of an aggregate: how many games carried the label and,
/// for a non-empty population, which share of it (or which rate) they show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateEntry {
    pub label: String,
    pub count: u64,
    /// `None` exactly when the population the statistic ran over was empty.
    pub percentage: Option<f64>,
}

/// Output of one statistic query: label/value rows plus the population size
/// the percentages refer to. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    pub name: String,
    pub total: u64,
    pub entries: Vec<AggregateEntry>,
}

impl AggregateResult {
    pub fn new(name: &str, total: u64, entries: Vec<AggregateEntry>) -> Self {
        Self {
            name: name.to_string(),
            total,
            entries,
        }
    }

    /// Builds a count-and-share result from per-label counts over a
    /// population of `total` records.
    pub fn from_counts(name: &str, total: u64, counts: Vec<(String, u64)>) -> Self {
        let entries = counts
            .into_iter()
            .map(|(label, count)| AggregateEntry {
                percentage: percentage_of(count, total),
                label,
                count,
            })
            .collect();

        Self::new(name, total, entries)
    }

    pub fn entry(&self, label: &str) -> Option<&AggregateEntry> {
        self.entries.iter().find(|e| e.label == label)
    }
}

/// Share of `count` in `total`, as a percentage. Undefined over an empty
/// population.
pub fn percentage_of(count: u64, total: u64) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(count as f64 / total as f64 * 100.0)
    }
}

/// Headline numbers of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyFindings {
    pub total_games: u64,
    pub dropped_rows: u64,
    pub unique_openings: u64,
    pub average_rating: Option<f64>,
}

/// Everything one pipeline run publishes. Either the whole report exists or
/// the run failed with a dataset error; no statistic is skipped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub outcomes: AggregateResult,
    pub opening_success: AggregateResult,
    pub rating_distribution: AggregateResult,
    pub time_controls: AggregateResult,
    pub strength_distribution: AggregateResult,
    pub findings: KeyFindings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_of_empty_population_is_undefined() {
        assert_eq!(percentage_of(0, 0), None);
        assert_eq!(percentage_of(3, 0), None);
    }

    #[test]
    fn test_percentage_of_share() {
        assert_eq!(percentage_of(1, 4), Some(25.0));
        assert_eq!(percentage_of(4, 4), Some(100.0));
    }

    #[test]
    fn test_from_counts_keeps_label_order() {
        let result = AggregateResult::from_counts(
            "example",
            4,
            vec![("a".to_string(), 3), ("b".to_string(), 1)],
        );

        assert_eq!(result.entries[0].label, "a");
        assert_eq!(result.entries[0].percentage, Some(75.0));
        assert_eq!(result.entry("b").unwrap().count, 1);
        assert_eq!(result.entry("missing"), None);
    }
}
