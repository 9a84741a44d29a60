pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod export;
pub mod loader;
pub mod services;
pub mod stats;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::{AnalyzeArgs, Command};
use crate::config::settings::AppConfig;
use crate::services::analysis::AnalysisService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_analyze(args: &AnalyzeArgs) -> Result<()> {
    let mut config = AppConfig::new();
    if let Some(top_n) = args.top_n {
        config.pipeline.opening_top_n = top_n;
    }
    if let Some(width) = args.bucket_width {
        config.pipeline.rating_bucket_width = width;
    }
    if let Some(min) = args.min_rating {
        config.pipeline.min_rating = min;
    }
    if let Some(max) = args.max_rating {
        config.pipeline.max_rating = max;
    }

    let service = AnalysisService::new(config);
    service.run(&args.input, &args.output)
}
