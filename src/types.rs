//! Data types used throughout the compass library.
//!
//! This module is organized by domain:
//! - [`answers`] - Axes, questions and the respondent's answers
//! - [`profiles`] - Reference profiles and affinity rankings

pub mod answers;
pub mod profiles;

pub use answers::{
    Answer, AnsweredSet, Axis, Multiplier, Question, QuestionCatalog, QuestionId, ANSWER_MAX,
    ANSWER_MIN,
};
pub use profiles::{AffinityEntry, AffinityTable, ProfileTable, ReferenceProfile};
