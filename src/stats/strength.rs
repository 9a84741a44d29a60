use crate::domain::models::{GameRecord, StrengthCategory};

use super::types::AggregateResult;

pub const NAME: &str = "strength_distribution";

/// How games split across player strength bands. All four labels are always
/// emitted, weakest band first.
pub fn strength_distribution(records: &[GameRecord]) -> AggregateResult {
    let total = records.len() as u64;

    let counts = StrengthCategory::ALL
        .iter()
        .map(|category| {
            let count = records.iter().filter(|r| r.strength == *category).count() as u64;
            (category.as_str().to_string(), count)
        })
        .collect();

    AggregateResult::from_counts(NAME, total, counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{GameOutcome, TimeControlCategory};

    fn record(id: u64, white_rating: u32) -> GameRecord {
        GameRecord {
            id,
            white_rating,
            black_rating: white_rating,
            outcome: GameOutcome::WhiteWin,
            opening: "English Opening".to_string(),
            opening_family: Some("English Opening".to_string()),
            time_control: TimeControlCategory::Standard,
            date: None,
            strength: StrengthCategory::from_rating(white_rating),
        }
    }

    #[test]
    fn test_games_land_in_their_bands() {
        let records = vec![
            record(0, 1200),
            record(1, 1700),
            record(2, 2100),
            record(3, 2500),
            record(4, 2500),
        ];

        let result = strength_distribution(&records);

        assert_eq!(result.total, 5);
        assert_eq!(result.entry("beginner").unwrap().count, 1);
        assert_eq!(result.entry("club").unwrap().count, 1);
        assert_eq!(result.entry("expert").unwrap().count, 1);
        assert_eq!(result.entry("master").unwrap().count, 2);
        assert_eq!(result.entry("master").unwrap().percentage, Some(40.0));
    }

    #[test]
    fn test_empty_input_keeps_all_bands() {
        let result = strength_distribution(&[]);

        assert_eq!(result.total, 0);
        assert_eq!(result.entries.len(), 4);
        assert!(result.entries.iter().all(|e| e.percentage.is_none()));
    }
}
