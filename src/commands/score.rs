use std::path::PathBuf;
use std::process::ExitCode;

use compass_lib::output::COMPASS_OUTPUT_VERSION;
use compass_lib::{
    build_report, compute_affinities, load_profiles, load_questions, load_responses,
    place_profile, AnsweredSet, CompassError, CompassOutput, ScoreOutput,
};

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};
use crate::settings::{load_config, log_effective_config, resolve_max_diff};

pub struct ScoreArgs {
    pub questions: PathBuf,
    pub responses: PathBuf,
    pub profiles: PathBuf,
    pub question_ids: Option<Vec<u32>>,
    pub max_diff: Option<i32>,
    pub no_placements: bool,
}

/// Run the score command.
pub fn run_score(
    config_path: Option<PathBuf>,
    args: ScoreArgs,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    match score(config_path, args) {
        Ok(body) => {
            if let Err(err) = write_output(&body, format, output.clone()) {
                return render_error(CompassError::Config(err.to_string()), format, output);
            }
            ExitCode::SUCCESS
        }
        Err(err) => render_error(err, format, output),
    }
}

fn score(config_path: Option<PathBuf>, args: ScoreArgs) -> Result<CompassOutput, CompassError> {
    let config = load_config(config_path.as_deref())?;
    let max_diff = resolve_max_diff(args.max_diff, &config);
    log_effective_config(config_path.as_deref(), &config, max_diff);
    let style = config.report_style()?;

    tracing::info!("Loading survey data…");
    let catalog = load_questions(&args.questions)?;
    let responses = load_responses(&args.responses)?;
    let profiles = load_profiles(&args.profiles)?;
    tracing::debug!(
        questions = catalog.len(),
        responses = responses.len(),
        profiles = profiles.len(),
        "survey data loaded"
    );

    let answered = AnsweredSet::from_responses(&catalog, &responses)?;
    let report = build_report(answered.answers(), &style);
    let affinities = compute_affinities(
        &answered.responses(),
        &profiles,
        args.question_ids.as_deref(),
        max_diff,
    )?;
    if let Some(top) = affinities.top() {
        tracing::info!("Closest profile: {} ({}%)", top.profile_id, top.percent());
    }

    let placements = if args.no_placements {
        Vec::new()
    } else {
        profiles
            .iter()
            .map(|profile| place_profile(profile, &catalog, &style))
            .collect()
    };

    Ok(CompassOutput::Score(ScoreOutput {
        version: COMPASS_OUTPUT_VERSION.to_string(),
        answered: answered.len(),
        report,
        top_match: affinities.top().cloned(),
        affinities,
        profiles: placements,
    }))
}
