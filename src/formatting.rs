use std::fmt::Write as FmtWrite;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use compass_lib::{CompassError, CompassOutput, ErrorOutput, COMPASS_OUTPUT_VERSION};

use crate::cli::OutputFormat;

/// Rows shown in the human-readable affinity table.
const PRETTY_AFFINITY_ROWS: usize = 10;

pub fn write_output(
    body: &CompassOutput,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let rendered = render(body, format, output.is_none())?;
    match output {
        Some(path) => std::fs::write(path, rendered)?,
        None => println!("{}", rendered.trim_end()),
    }
    Ok(())
}

/// Human text only when printing to a terminal; files and pipes get JSON.
fn render(
    body: &CompassOutput,
    format: OutputFormat,
    to_stdout: bool,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(body),
        OutputFormat::Pretty if to_stdout && io::stdout().is_terminal() => {
            Ok(format_pretty(body, true))
        }
        OutputFormat::Pretty => serde_json::to_string_pretty(body),
    }
}

pub fn render_error(err: CompassError, format: OutputFormat, output: Option<PathBuf>) -> ExitCode {
    tracing::debug!("command failed: {err}");
    let error = err.to_payload();
    let body = CompassOutput::Error(ErrorOutput {
        version: COMPASS_OUTPUT_VERSION.to_string(),
        message: Some(error.message.clone()),
        error,
    });

    if let Err(write_err) = write_output(&body, format, output) {
        eprintln!("compass: {err} (could not write error output: {write_err})");
    }
    ExitCode::from(2)
}

pub fn format_pretty(body: &CompassOutput, colorize: bool) -> String {
    match body {
        CompassOutput::Score(out) => {
            let mut buf = String::new();
            let header = Tint::Cyan.paint("[COMPASS]", colorize);
            writeln!(buf, "{} {} question(s) answered", header, out.answered).ok();

            let scores = &out.report.scores;
            writeln!(buf, "Axis scores:").ok();
            for (name, score) in [
                ("economic", scores.economic),
                ("social", scores.social),
                ("political", scores.political),
            ] {
                writeln!(buf, "- {:10} {:+.3}", name, score).ok();
            }
            writeln!(
                buf,
                "Position: left {}, top {}",
                out.report.position.left_css(),
                out.report.position.top_css()
            )
            .ok();
            writeln!(buf, "Political color: {}", out.report.political_color).ok();

            if out.affinities.is_empty() {
                writeln!(buf, "Affinities: none (no answered questions to compare)").ok();
            } else {
                writeln!(buf, "Affinities (top {}):", PRETTY_AFFINITY_ROWS).ok();
                for entry in out.affinities.iter().take(PRETTY_AFFINITY_ROWS) {
                    let pct = format!("{:>3}%", entry.percent());
                    writeln!(
                        buf,
                        "- {:16} {}",
                        entry.profile_id,
                        Tint::for_affinity(entry.score).paint(&pct, colorize)
                    )
                    .ok();
                }
            }
            buf
        }
        CompassOutput::Color(out) => {
            let mut buf = String::new();
            let header = Tint::Magenta.paint("[COLOR]", colorize);
            writeln!(
                buf,
                "{} {} -> {} at t={}: {}",
                header, out.from, out.to, out.t, out.color
            )
            .ok();
            buf
        }
        CompassOutput::Error(out) => {
            let mut buf = String::new();
            let header = Tint::Red.paint("[ERROR]", colorize);
            let message = out
                .message
                .as_deref()
                .unwrap_or_else(|| out.error.message.as_str());
            writeln!(buf, "{} {}", header, message).ok();
            if let Some(remediation) = &out.error.remediation {
                writeln!(buf, "Hint: {}", remediation).ok();
            }
            buf
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tint {
    Red,
    Green,
    Yellow,
    Magenta,
    Cyan,
}

impl Tint {
    fn ansi(self) -> u8 {
        match self {
            Tint::Red => 31,
            Tint::Green => 32,
            Tint::Yellow => 33,
            Tint::Magenta => 35,
            Tint::Cyan => 36,
        }
    }

    fn paint(self, text: &str, enabled: bool) -> String {
        if enabled {
            format!("\x1b[{}m{text}\x1b[0m", self.ansi())
        } else {
            text.to_owned()
        }
    }

    fn for_affinity(score: f64) -> Self {
        match score {
            s if s >= 0.75 => Tint::Green,
            s if s >= 0.5 => Tint::Yellow,
            _ => Tint::Red,
        }
    }
}
