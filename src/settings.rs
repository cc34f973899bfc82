use std::path::Path;

use compass_lib::{CompassError, Config};

pub fn load_config(path: Option<&Path>) -> Result<Config, CompassError> {
    let cfg = if let Some(p) = path {
        Config::from_toml_file(p).map_err(|e| {
            CompassError::Config(format!("Failed to read config {}: {}", p.display(), e))
        })?
    } else {
        Config::default()
    };

    cfg.validate()
        .map_err(|e| CompassError::Config(format!("Invalid config: {}", e)))?;
    Ok(cfg)
}

/// Flag value when given, config value otherwise.
pub fn resolve_max_diff(cli_max_diff: Option<i32>, config: &Config) -> i32 {
    cli_max_diff.unwrap_or(config.max_diff_per_question)
}

pub fn log_effective_config(config_path: Option<&Path>, config: &Config, max_diff: i32) {
    let config_source = config_path
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "defaults/built-in".to_string());
    tracing::info!(
        "Effective config (source: {}): max diff per question {}, marker offset {}, gradient {} -> {}",
        config_source,
        max_diff,
        config.marker_offset,
        config.gradient.start,
        config.gradient.end
    );
}
