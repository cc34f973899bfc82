mod color;
mod score;

pub use color::{run_color, ColorArgs};
pub use score::{run_score, ScoreArgs};
