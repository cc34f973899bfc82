use std::collections::BTreeMap;

use crate::error::{CompassError, Result};
use crate::types::{AffinityEntry, AffinityTable, ProfileTable, QuestionId};

/// Largest distance between two answers on the -2..2 scale.
pub const DEFAULT_MAX_DIFF_PER_QUESTION: i32 = 4;

/// Ranks reference profiles by how close their answers are to the respondent's.
///
/// The working set is `question_ids` (or every answered question when
/// `None`), restricted to questions the respondent answered. Each profile's
/// affinity is `1 - sum(|user - profile|) / (max_diff_per_question * |working set|)`
/// clamped to [0, 1].
///
/// A profile without an entry for some question contributes nothing for it,
/// yet the denominator still counts that question. Profiles with sparse data
/// therefore score optimistically; a profile with no entries at all scores 1.0.
///
/// The result is sorted by descending affinity; equal scores keep the order
/// of `profiles`. An empty working set yields an empty table.
pub fn compute_affinities(
    user_answers: &BTreeMap<QuestionId, i32>,
    profiles: &ProfileTable,
    question_ids: Option<&[QuestionId]>,
    max_diff_per_question: i32,
) -> Result<AffinityTable> {
    if max_diff_per_question <= 0 {
        return Err(CompassError::invalid_argument(format!(
            "max_diff_per_question must be positive, got {max_diff_per_question}"
        )));
    }

    let working_set: Vec<QuestionId> = match question_ids {
        Some(ids) => ids
            .iter()
            .copied()
            .filter(|id| user_answers.contains_key(id))
            .collect(),
        None => user_answers.keys().copied().collect(),
    };

    if working_set.is_empty() {
        tracing::debug!("no answered questions in the working set; affinity table is empty");
        return Ok(AffinityTable::default());
    }

    let max_possible_distance = f64::from(max_diff_per_question) * working_set.len() as f64;
    tracing::debug!(
        questions = working_set.len(),
        profiles = profiles.len(),
        max_possible_distance,
        "computing affinities"
    );

    let mut entries: Vec<AffinityEntry> = profiles
        .iter()
        .map(|profile| {
            let total_difference: i64 = working_set
                .iter()
                .filter_map(|id| {
                    let reference = profile.get(*id)?;
                    let answer = user_answers.get(id)?;
                    Some((i64::from(*answer) - i64::from(reference)).abs())
                })
                .sum();
            let score = (1.0 - total_difference as f64 / max_possible_distance).clamp(0.0, 1.0);
            tracing::trace!(profile = %profile.id, total_difference, score, "profile distance");
            AffinityEntry {
                profile_id: profile.id.clone(),
                score,
            }
        })
        .collect();

    // sort_by is stable, so ties stay in table order.
    entries.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ok(AffinityTable::from_sorted(entries))
}
