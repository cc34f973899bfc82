//! Combines axis scores, chart position and color into one result, for the
//! respondent and for each reference profile.

use serde::{Deserialize, Serialize};

use crate::presentation::{
    to_display_coordinate_with_offset, DisplayCoordinate, Gradient, MARKER_OFFSET,
};
use crate::scoring::{compute_axis_scores, AxisScores};
use crate::types::{Answer, AnsweredSet, QuestionCatalog, ReferenceProfile};

/// Chart settings used when turning scores into a report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportStyle {
    pub marker_offset: f64,
    pub gradient: Gradient,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            marker_offset: MARKER_OFFSET,
            gradient: Gradient::political(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompassReport {
    pub scores: AxisScores,
    /// Economic score on the horizontal axis, social on the vertical.
    pub position: DisplayCoordinate,
    pub political_color: String,
}

impl CompassReport {
    pub fn from_scores(scores: AxisScores, style: &ReportStyle) -> Self {
        let position =
            to_display_coordinate_with_offset(scores.economic, scores.social, style.marker_offset);
        Self {
            scores,
            position,
            political_color: style.gradient.at(political_percentage(scores.political)),
        }
    }
}

/// Scores `answers` and derives its chart position and political color.
pub fn build_report<'a, I>(answers: I, style: &ReportStyle) -> CompassReport
where
    I: IntoIterator<Item = &'a Answer>,
{
    CompassReport::from_scores(compute_axis_scores(answers), style)
}

/// Political score in [-1, 1] rescaled to [0, 1].
pub fn political_percentage(political: f64) -> f64 {
    (political + 1.0) / 2.0
}

/// Color of a political score in [-1, 1] on the default gradient.
pub fn political_color_for_score(political: f64) -> String {
    Gradient::political().at(political_percentage(political))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePlacement {
    pub profile_id: String,
    pub report: CompassReport,
}

/// Reads a profile's reference answers as answers to the catalog's questions.
///
/// Entries for questions missing from the catalog are skipped.
pub fn profile_answers(profile: &ReferenceProfile, catalog: &QuestionCatalog) -> AnsweredSet {
    profile
        .answers
        .iter()
        .filter_map(|(&index, &value)| {
            let question = catalog.get(index)?;
            Some(Answer::new(index, value, question.axis, question.multiplier))
        })
        .collect()
}

/// Places a reference profile on the same chart as the respondent.
pub fn place_profile(
    profile: &ReferenceProfile,
    catalog: &QuestionCatalog,
    style: &ReportStyle,
) -> ProfilePlacement {
    let answers = profile_answers(profile, catalog);
    tracing::debug!(profile = %profile.id, answers = answers.len(), "placing profile");
    ProfilePlacement {
        profile_id: profile.id.clone(),
        report: build_report(answers.answers(), style),
    }
}
