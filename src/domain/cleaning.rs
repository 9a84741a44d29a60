use anyhow::Result;
use chrono::NaiveDate;
use log::{debug, info};

use crate::config::settings::PipelineSettings;

use super::models::{GameOutcome, GameRecord, RawGameRow, StrengthCategory};
use super::openings::opening_family;
use super::timecontrol::TimeControlParser;

const DATE_FORMAT: &str = "%Y.%m.%d";

/// Result of one cleaning pass: the surviving records plus a diagnostic
/// count of rows that were filtered out.
pub struct CleaningOutcome {
    pub records: Vec<GameRecord>,
    pub dropped_rows: u64,
}

/// Turns raw CSV rows into typed game records.
///
/// A row survives when it carries a recognizable result and both ratings
/// parse into the accepted range. The remaining fields are derived, not
/// checked, and degrade to a fallback when they fail to parse. Row-level
/// problems are never fatal.
pub struct RecordCleaner {
    min_rating: u32,
    max_rating: u32,
    timecontrol: TimeControlParser,
}

impl RecordCleaner {
    pub fn new(settings: &PipelineSettings) -> Result<Self> {
        Ok(Self {
            min_rating: settings.min_rating,
            max_rating: settings.max_rating,
            timecontrol: TimeControlParser::new()?,
        })
    }

    pub fn clean(&self, rows: &[RawGameRow]) -> CleaningOutcome {
        let mut records = Vec::with_capacity(rows.len());
        let mut dropped_rows = 0u64;

        for (idx, row) in rows.iter().enumerate() {
            match self.clean_row(idx as u64, row) {
                Some(record) => records.push(record),
                None => {
                    dropped_rows += 1;
                    debug!("Dropped row {}: failed validity checks", idx);
                }
            }
        }

        info!(
            "Cleaned {} rows into {} records ({} dropped)",
            rows.len(),
            records.len(),
            dropped_rows
        );

        CleaningOutcome {
            records,
            dropped_rows,
        }
    }

    fn clean_row(&self, id: u64, row: &RawGameRow) -> Option<GameRecord> {
        let outcome = GameOutcome::parse(row.result.as_deref()?)?;
        let white_rating = self.parse_rating(row.white_elo.as_deref())?;
        let black_rating = self.parse_rating(row.black_elo.as_deref())?;

        let opening = row.opening.clone().unwrap_or_default();
        let time_control = self
            .timecontrol
            .categorize(row.time_control.as_deref().unwrap_or(""));

        Some(GameRecord {
            id,
            white_rating,
            black_rating,
            outcome,
            opening_family: opening_family(&opening),
            opening,
            time_control,
            date: self.parse_date(row.utc_date.as_deref()),
            strength: StrengthCategory::from_rating(white_rating),
        })
    }

    fn parse_rating(&self, raw: Option<&str>) -> Option<u32> {
        let rating: u32 = raw?.trim().parse().ok()?;
        if rating < self.min_rating || rating > self.max_rating {
            return None;
        }
        Some(rating)
    }

    fn parse_date(&self, raw: Option<&str>) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(raw?.trim(), DATE_FORMAT).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::TimeControlCategory;

    fn cleaner() -> RecordCleaner {
        RecordCleaner::new(&PipelineSettings::default()).unwrap()
    }

    fn raw_row(result: &str, white_elo: &str, black_elo: &str) -> RawGameRow {
        RawGameRow {
            result: Some(result.to_string()),
            white_elo: Some(white_elo.to_string()),
            black_elo: Some(black_elo.to_string()),
            opening: Some("Italian Game: Two Knights Defense".to_string()),
            time_control: Some("600+5".to_string()),
            utc_date: Some("2023.04.01".to_string()),
            ..RawGameRow::default()
        }
    }

    #[test]
    fn test_valid_row_becomes_a_typed_record() {
        let outcome = cleaner().clean(&[raw_row("1-0", "1850", "1790")]);

        assert_eq!(outcome.dropped_rows, 0);
        assert_eq!(outcome.records.len(), 1);

        let record = &outcome.records[0];
        assert_eq!(record.outcome, GameOutcome::WhiteWin);
        assert_eq!(record.white_rating, 1850);
        assert_eq!(record.black_rating, 1790);
        assert_eq!(record.opening_family.as_deref(), Some("Italian Game"));
        assert_eq!(record.time_control, TimeControlCategory::Increment);
        assert_eq!(record.strength, StrengthCategory::Club);
        assert_eq!(
            record.date,
            NaiveDate::from_ymd_opt(2023, 4, 1)
        );
    }

    #[test]
    fn test_rows_without_a_result_are_dropped() {
        let mut no_result = raw_row("1-0", "1500", "1500");
        no_result.result = None;

        let outcome = cleaner().clean(&[no_result, raw_row("*", "1500", "1500")]);

        assert!(outcome.records.is_empty());
        assert_eq!(outcome.dropped_rows, 2);
    }

    #[test]
    fn test_rows_with_bad_ratings_are_dropped() {
        let rows = [
            raw_row("1-0", "abc", "1500"),
            raw_row("1-0", "1500", ""),
            raw_row("1-0", "-12", "1500"),
            raw_row("1-0", "1500", "4001"),
        ];

        let outcome = cleaner().clean(&rows);

        assert!(outcome.records.is_empty());
        assert_eq!(outcome.dropped_rows, 4);
    }

    #[test]
    fn test_rating_range_bounds_are_inclusive() {
        let outcome = cleaner().clean(&[raw_row("1-0", "0", "4000")]);
        assert_eq!(outcome.records.len(), 1);
    }

    #[test]
    fn test_bad_dates_and_openings_do_not_drop_the_row() {
        let mut row = raw_row("0-1", "1500", "1500");
        row.utc_date = Some("not a date".to_string());
        row.opening = None;

        let outcome = cleaner().clean(&[row]);

        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].date, None);
        assert_eq!(outcome.records[0].opening_family, None);
    }

    #[test]
    fn test_record_ids_keep_the_original_row_ordinal() {
        let rows = [
            raw_row("1-0", "1500", "1500"),
            raw_row("*", "1500", "1500"),
            raw_row("0-1", "1500", "1500"),
        ];

        let outcome = cleaner().clean(&rows);

        let ids: Vec<u64> = outcome.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test]
    fn test_custom_rating_range_is_honored() {
        let settings = PipelineSettings {
            min_rating: 1000,
            max_rating: 2000,
            ..PipelineSettings::default()
        };
        let cleaner = RecordCleaner::new(&settings).unwrap();

        let outcome = cleaner.clean(&[
            raw_row("1-0", "999", "1500"),
            raw_row("1-0", "1000", "2000"),
            raw_row("1-0", "1500", "2001"),
        ]);

        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.dropped_rows, 2);
    }
}
