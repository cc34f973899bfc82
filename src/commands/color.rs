use std::path::PathBuf;
use std::process::ExitCode;

use compass_lib::output::COMPASS_OUTPUT_VERSION;
use compass_lib::presentation::to_hex;
use compass_lib::report::political_percentage;
use compass_lib::{interpolate_color, ColorOutput, CompassError, CompassOutput};

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};
use crate::settings::load_config;

pub struct ColorArgs {
    pub from: Option<String>,
    pub to: Option<String>,
    pub t: Option<f64>,
    pub political: Option<f64>,
}

/// Run the color command.
pub fn run_color(
    config_path: Option<PathBuf>,
    args: ColorArgs,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    match color(config_path, args) {
        Ok(body) => {
            if let Err(err) = write_output(&body, format, output.clone()) {
                return render_error(CompassError::Config(err.to_string()), format, output);
            }
            ExitCode::SUCCESS
        }
        Err(err) => render_error(err, format, output),
    }
}

fn color(config_path: Option<PathBuf>, args: ColorArgs) -> Result<CompassOutput, CompassError> {
    let config = load_config(config_path.as_deref())?;
    let gradient = config.gradient()?;

    let t = match (args.t, args.political) {
        (Some(t), _) => t,
        (None, Some(political)) => political_percentage(political),
        (None, None) => {
            return Err(CompassError::invalid_argument(
                "either --t or --political is required",
            ))
        }
    };
    let from = args.from.unwrap_or_else(|| to_hex(gradient.start));
    let to = args.to.unwrap_or_else(|| to_hex(gradient.end));
    let color = interpolate_color(&from, &to, t)?;
    tracing::debug!("{from} -> {to} at {t}: {color}");

    Ok(CompassOutput::Color(ColorOutput {
        version: COMPASS_OUTPUT_VERSION.to_string(),
        from,
        to,
        t,
        color,
    }))
}
