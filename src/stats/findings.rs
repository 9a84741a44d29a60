use std::collections::HashSet;

use crate::domain::models::GameRecord;

use super::types::KeyFindings;

/// Headline numbers for the console summary: cleaned game count, rows lost
/// to cleaning, distinct raw opening names and the mean white rating.
pub fn key_findings(records: &[GameRecord], dropped_rows: u64) -> KeyFindings {
    let unique_openings = records
        .iter()
        .map(|r| r.opening.as_str())
        .filter(|opening| !opening.is_empty())
        .collect::<HashSet<_>>()
        .len() as u64;

    let average_rating = if records.is_empty() {
        None
    } else {
        let sum: u64 = records.iter().map(|r| u64::from(r.white_rating)).sum();
        Some(sum as f64 / records.len() as f64)
    };

    KeyFindings {
        total_games: records.len() as u64,
        dropped_rows,
        unique_openings,
        average_rating,
    }
}
