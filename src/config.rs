use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CompassError, Result};
use crate::presentation::{to_hex, Gradient, MARKER_OFFSET};
use crate::report::ReportStyle;
use crate::scoring::DEFAULT_MAX_DIFF_PER_QUESTION;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub max_diff_per_question: i32,
    pub marker_offset: f64,
    pub gradient: GradientConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientConfig {
    pub start: String,
    pub end: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_diff_per_question: DEFAULT_MAX_DIFF_PER_QUESTION,
            marker_offset: MARKER_OFFSET,
            gradient: GradientConfig::default(),
        }
    }
}

impl Default for GradientConfig {
    fn default() -> Self {
        let political = Gradient::political();
        Self {
            start: to_hex(political.start),
            end: to_hex(political.end),
        }
    }
}

impl Config {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| CompassError::Config(e.to_string()))
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&raw)?;
        tracing::debug!("config loaded from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_diff_per_question <= 0 {
            return Err(CompassError::Config(format!(
                "max_diff_per_question must be positive, got {}",
                self.max_diff_per_question
            )));
        }
        if !self.marker_offset.is_finite() {
            return Err(CompassError::Config(
                "marker_offset must be a finite number".to_string(),
            ));
        }
        self.gradient()?;
        Ok(())
    }

    pub fn gradient(&self) -> Result<Gradient> {
        Gradient::from_hex(&self.gradient.start, &self.gradient.end)
            .map_err(|e| CompassError::Config(format!("invalid gradient: {e}")))
    }

    pub fn report_style(&self) -> Result<ReportStyle> {
        Ok(ReportStyle {
            marker_offset: self.marker_offset,
            gradient: self.gradient()?,
        })
    }
}
