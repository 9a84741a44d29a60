use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "chess pattern analysis pipeline")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Clean a games dataset, compute the summary statistics and export them
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct AnalyzeArgs {
    /// Path to the chess games CSV file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Directory the result tables and the JSON report are written to
    #[arg(short, long, default_value = "chess_analysis_results")]
    pub output: PathBuf,

    /// How many openings the success-rate ranking keeps
    #[arg(long)]
    pub top_n: Option<usize>,

    /// Width of the rating histogram buckets
    #[arg(long)]
    pub bucket_width: Option<u32>,

    /// Lowest rating accepted during cleaning
    #[arg(long)]
    pub min_rating: Option<u32>,

    /// Highest rating accepted during cleaning
    #[arg(long)]
    pub max_rating: Option<u32>,
}
