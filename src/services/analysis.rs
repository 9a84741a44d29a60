use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;

use crate::config::settings::AppConfig;
use crate::domain::cleaning::RecordCleaner;
use crate::export;
use crate::loader;
use crate::stats;
use crate::stats::types::AnalysisReport;

/// Runs the whole batch: load, clean, aggregate, export.
pub struct AnalysisService {
    config: AppConfig,
}

impl AnalysisService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, input: &Path, output: &Path) -> Result<()> {
        info!("=== Starting Chess Pattern Analysis ===");

        let report = self.build_report(input)?;

        export::write_report(&report, output)?;
        self.print_findings(&report);

        info!("=== Analysis Complete ===");
        Ok(())
    }

    /// Computes every statistic from the dataset, or fails once with the
    /// dataset error before anything is produced.
    pub fn build_report(&self, input: &Path) -> Result<AnalysisReport> {
        let dataset = loader::load_games(input)
            .with_context(|| format!("Failed to load dataset {}", input.display()))?;

        let cleaner = RecordCleaner::new(&self.config.pipeline)?;
        let cleaning = cleaner.clean(&dataset.rows);
        let records = cleaning.records;
        let dropped = dataset.unreadable_rows + cleaning.dropped_rows;

        let settings = &self.config.pipeline;
        Ok(AnalysisReport {
            outcomes: stats::outcome_distribution(&records),
            opening_success: stats::opening_success_rates(&records, settings),
            rating_distribution: stats::rating_distribution(&records, settings),
            time_controls: stats::time_control_preferences(&records),
            strength_distribution: stats::strength_distribution(&records),
            findings: stats::key_findings(&records, dropped),
        })
    }

    fn print_findings(&self, report: &AnalysisReport) {
        let findings = &report.findings;

        println!("{}", "Key Findings:".bold());
        println!("- Total games analyzed: {}", findings.total_games);
        println!("- Rows dropped during cleaning: {}", findings.dropped_rows);
        println!("- Unique openings: {}", findings.unique_openings);
        match findings.average_rating {
            Some(average) => println!("- Average player rating: {average:.0}"),
            None => println!("- Average player rating: {}", "n/a".dimmed()),
        }
    }
}
