use crate::config::settings::PipelineSettings;
use crate::domain::models::GameRecord;

use super::types::{AggregateEntry, AggregateResult, percentage_of};

pub const NAME: &str = "rating_distribution";

/// Histogram of per-game mean rating in fixed-width buckets.
///
/// Buckets are half-open `[low, low + width)` anchored at the configured
/// minimum rating; the configured maximum falls into the topmost bucket.
/// Only non-empty buckets are emitted, lowest first.
pub fn rating_distribution(records: &[GameRecord], settings: &PipelineSettings) -> AggregateResult {
    let total = records.len() as u64;
    let width = settings.rating_bucket_width.max(1);

    let bucket_count = bucket_count(settings.min_rating, settings.max_rating, width);
    let mut counts = vec![0u64; bucket_count];

    for record in records {
        let offset = record.mean_rating() - f64::from(settings.min_rating);
        let mut index = (offset / f64::from(width)) as usize;
        if index >= bucket_count {
            index = bucket_count - 1;
        }
        counts[index] += 1;
    }

    let entries = counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(index, &count)| AggregateEntry {
            label: bucket_label(settings.min_rating, width, index),
            count,
            percentage: percentage_of(count, total),
        })
        .collect();

    AggregateResult::new(NAME, total, entries)
}

fn bucket_count(min: u32, max: u32, width: u32) -> usize {
    let span = max.saturating_sub(min).max(1);
    span.div_ceil(width) as usize
}

fn bucket_label(min: u32, width: u32, index: usize) -> String {
    let low = min + width * index as u32;
    let high = low + width;
    format!("{low}-{high}")
}
