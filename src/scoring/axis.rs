use serde::{Deserialize, Serialize};

use crate::types::{Answer, Axis, ANSWER_MAX};

/// Per-axis position in [-1, 1]. An axis nobody answered sits at 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisScores {
    pub economic: f64,
    pub social: f64,
    pub political: f64,
}

impl AxisScores {
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Economic => self.economic,
            Axis::Social => self.social,
            Axis::Political => self.political,
        }
    }

    fn set(&mut self, axis: Axis, score: f64) {
        match axis {
            Axis::Economic => self.economic = score,
            Axis::Social => self.social = score,
            Axis::Political => self.political = score,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct AxisTally {
    weighted_sum: i64,
    answered: u32,
}

impl AxisTally {
    fn add(&mut self, answer: &Answer) {
        self.weighted_sum += answer.weighted();
        self.answered += 1;
    }

    fn score(&self) -> f64 {
        if self.answered == 0 {
            return 0.0;
        }
        let max_abs = f64::from(self.answered) * f64::from(ANSWER_MAX);
        (self.weighted_sum as f64 / max_abs).clamp(-1.0, 1.0)
    }
}

/// Averages the weighted answers of each axis onto [-1, 1].
///
/// Each axis score is `sum(value * multiplier) / (n * 2)` over that axis'
/// answers, clamped to [-1, 1]. Input order does not matter.
pub fn compute_axis_scores<'a, I>(answers: I) -> AxisScores
where
    I: IntoIterator<Item = &'a Answer>,
{
    let mut tallies = [AxisTally::default(); 3];
    for answer in answers {
        tallies[axis_slot(answer.axis)].add(answer);
    }

    let mut scores = AxisScores::default();
    for axis in Axis::ALL {
        let tally = &tallies[axis_slot(axis)];
        tracing::trace!(
            axis = %axis,
            answered = tally.answered,
            weighted_sum = tally.weighted_sum,
            "axis tally"
        );
        scores.set(axis, tally.score());
    }
    scores
}

fn axis_slot(axis: Axis) -> usize {
    match axis {
        Axis::Economic => 0,
        Axis::Social => 1,
        Axis::Political => 2,
    }
}
