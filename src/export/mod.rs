use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::stats::types::{AggregateResult, AnalysisReport};

const REPORT_FILE: &str = "report.json";

/// Writes each aggregate as its own CSV table plus the whole report as JSON
/// into the output directory. This is the hand-off surface for the
/// visualization side; nothing else is persisted.
pub fn write_report(report: &AnalysisReport, output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory {}", output_dir.display())
    })?;

    write_table(&report.outcomes, output_dir, "outcome_analysis.csv")?;
    write_table(&report.opening_success, output_dir, "opening_analysis.csv")?;
    write_table(&report.rating_distribution, output_dir, "rating_distribution.csv")?;
    write_table(&report.time_controls, output_dir, "time_control_analysis.csv")?;
    write_table(&report.strength_distribution, output_dir, "strength_distribution.csv")?;
    write_json(report, output_dir)?;

    info!("Wrote analysis results to {}", output_dir.display());
    Ok(())
}

fn write_table(result: &AggregateResult, output_dir: &Path, file_name: &str) -> Result<()> {
    let path = output_dir.join(file_name);
    let mut writer =
        csv::Writer::from_path(&path).with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record(["label", "count", "percentage"])?;
    for entry in &result.entries {
        let count = entry.count.to_string();
        let percentage = entry
            .percentage
            .map(|p| format!("{p:.2}"))
            .unwrap_or_default();
        writer.write_record([entry.label.as_str(), count.as_str(), percentage.as_str()])?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn write_json(report: &AnalysisReport, output_dir: &Path) -> Result<()> {
    let path = output_dir.join(REPORT_FILE);
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
