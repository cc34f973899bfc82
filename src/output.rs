use serde::{Deserialize, Serialize};

use crate::error::ErrorPayload;
use crate::report::{CompassReport, ProfilePlacement};
use crate::types::{AffinityEntry, AffinityTable};

pub const COMPASS_OUTPUT_VERSION: &str = "1";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CompassOutput {
    Score(ScoreOutput),
    Color(ColorOutput),
    Error(ErrorOutput),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreOutput {
    pub version: String,
    /// Number of questions answered.
    pub answered: usize,
    pub report: CompassReport,
    pub affinities: AffinityTable,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_match: Option<AffinityEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub profiles: Vec<ProfilePlacement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorOutput {
    pub version: String,
    pub from: String,
    pub to: String,
    pub t: f64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorOutput {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub error: ErrorPayload,
}
