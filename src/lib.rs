pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod presentation;
pub mod report;
pub mod scoring;
pub mod types;

pub use config::{Config, GradientConfig};
pub use error::{CompassError, ErrorCategory, ErrorPayload, Result};
pub use input::{load_profiles, load_questions, load_responses, DataFormat};
pub use output::{ColorOutput, CompassOutput, ErrorOutput, ScoreOutput, COMPASS_OUTPUT_VERSION};
pub use presentation::{
    interpolate_color, parse_hex_color, political_color, to_display_coordinate, DisplayCoordinate,
    Gradient, MARKER_OFFSET,
};
pub use report::{
    build_report, place_profile, political_color_for_score, CompassReport, ProfilePlacement,
    ReportStyle,
};
pub use scoring::{
    compute_affinities, compute_axis_scores, AxisScores, DEFAULT_MAX_DIFF_PER_QUESTION,
};
pub use types::{
    AffinityEntry, AffinityTable, Answer, AnsweredSet, Axis, Multiplier, ProfileTable, Question,
    QuestionCatalog, QuestionId, ReferenceProfile,
};
