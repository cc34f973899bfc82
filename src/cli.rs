use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "compass",
    version,
    about = "Score survey answers on policy axes and rank affinity with reference profiles"
)]
pub struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute axis scores, chart position and profile affinities
    Score {
        /// Question catalog (JSON or YAML)
        #[arg(long)]
        questions: PathBuf,

        /// Responses as {questionId: value} (JSON or YAML)
        #[arg(long)]
        responses: PathBuf,

        /// Reference profiles as {profileId: {questionId: value}} (JSON or YAML)
        #[arg(long)]
        profiles: PathBuf,

        /// Restrict the affinity comparison to these question ids
        #[arg(long, value_delimiter = ',')]
        question_ids: Option<Vec<u32>>,

        /// Largest possible difference between two answers to one question
        #[arg(long, allow_negative_numbers = true)]
        max_diff: Option<i32>,

        /// Skip placing reference profiles on the chart
        #[arg(long)]
        no_placements: bool,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Interpolate between two hex colors
    Color {
        /// Start color; defaults to the political gradient start
        #[arg(long)]
        from: Option<String>,

        /// End color; defaults to the political gradient end
        #[arg(long)]
        to: Option<String>,

        /// Position along the gradient (not clamped)
        #[arg(long, allow_negative_numbers = true, conflicts_with = "political")]
        t: Option<f64>,

        /// Political score in [-1, 1], mapped to (score + 1) / 2 on the gradient
        #[arg(long, allow_negative_numbers = true)]
        political: Option<f64>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Pretty,
}

pub fn parse() -> Cli {
    Cli::parse()
}
