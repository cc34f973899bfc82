mod cli;
mod commands;
mod formatting;
mod settings;

use std::process::ExitCode;

use cli::Commands;
use commands::{run_color, run_score};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = cli::parse();
    init_logging(args.verbose);

    match args.command {
        Commands::Score {
            questions,
            responses,
            profiles,
            question_ids,
            max_diff,
            no_placements,
            format,
            output,
        } => run_score(
            args.config,
            commands::ScoreArgs {
                questions,
                responses,
                profiles,
                question_ids,
                max_diff,
                no_placements,
            },
            format,
            output,
        ),
        Commands::Color {
            from,
            to,
            t,
            political,
            format,
            output,
        } => run_color(
            args.config,
            commands::ColorArgs {
                from,
                to,
                t,
                political,
            },
            format,
            output,
        ),
    }
}

/// Logs go to stderr so stdout stays machine-readable. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose {
        "compass=debug,compass_lib=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
