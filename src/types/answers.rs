//! Survey questions and the answers a respondent gives to them.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CompassError, Result};

/// Identifier of a question in the catalog.
pub type QuestionId = u32;

/// Lowest value on the answer scale.
pub const ANSWER_MIN: i32 = -2;
/// Highest value on the answer scale.
pub const ANSWER_MAX: i32 = 2;

/// Scoring dimension a question contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Axis {
    Economic,
    Social,
    Political,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::Economic, Axis::Social, Axis::Political];

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Economic => "economic",
            Axis::Social => "social",
            Axis::Political => "political",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = CompassError;

    /// Accepts the English names and the Portuguese labels used by the
    /// published question sheets.
    fn from_str(label: &str) -> Result<Self> {
        match label.trim().to_lowercase().as_str() {
            "economic" | "económico" | "economico" => Ok(Axis::Economic),
            "social" => Ok(Axis::Social),
            "political" | "política" | "politica" => Ok(Axis::Political),
            other => Err(CompassError::validation(format!(
                "unrecognized axis label '{other}'"
            ))),
        }
    }
}

impl TryFrom<String> for Axis {
    type Error = CompassError;

    fn try_from(label: String) -> Result<Self> {
        label.parse()
    }
}

impl From<Axis> for String {
    fn from(axis: Axis) -> Self {
        axis.as_str().to_string()
    }
}

/// Direction a question's answer pushes its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Multiplier {
    Positive,
    Negative,
}

impl Multiplier {
    pub fn value(self) -> i32 {
        match self {
            Multiplier::Positive => 1,
            Multiplier::Negative => -1,
        }
    }
}

impl TryFrom<i32> for Multiplier {
    type Error = CompassError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            1 => Ok(Multiplier::Positive),
            -1 => Ok(Multiplier::Negative),
            other => Err(CompassError::validation(format!(
                "multiplier must be 1 or -1, got {other}"
            ))),
        }
    }
}

impl From<Multiplier> for i32 {
    fn from(multiplier: Multiplier) -> Self {
        multiplier.value()
    }
}

/// A catalog entry describing how a question is scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub index: QuestionId,
    #[serde(rename = "type")]
    pub axis: Axis,
    pub multiplier: Multiplier,
    /// Part of the short questionnaire.
    #[serde(default)]
    pub short: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Ordered list of questions with unique indices.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        let mut seen = std::collections::BTreeSet::new();
        for question in &questions {
            if !seen.insert(question.index) {
                return Err(CompassError::validation(format!(
                    "duplicate question index {}",
                    question.index
                )));
            }
        }
        Ok(Self { questions })
    }

    pub fn get(&self, index: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.index == index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions of the short questionnaire, in catalog order.
    pub fn short_form(&self) -> Vec<&Question> {
        self.questions.iter().filter(|q| q.short).collect()
    }

    /// Short questions first, then the remaining ones, each group in catalog order.
    pub fn full_form(&self) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| q.short)
            .chain(self.questions.iter().filter(|q| !q.short))
            .collect()
    }
}

impl<'de> Deserialize<'de> for QuestionCatalog {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let questions = Vec::<Question>::deserialize(deserializer)?;
        QuestionCatalog::new(questions).map_err(serde::de::Error::custom)
    }
}

/// A respondent's answer to one question, carrying the question's scoring data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub index: QuestionId,
    pub answer_value: i32,
    pub axis: Axis,
    pub multiplier: Multiplier,
}

impl Answer {
    pub fn new(index: QuestionId, answer_value: i32, axis: Axis, multiplier: Multiplier) -> Self {
        Self {
            index,
            answer_value,
            axis,
            multiplier,
        }
    }

    pub fn weighted(&self) -> i64 {
        i64::from(self.answer_value) * i64::from(self.multiplier.value())
    }
}

/// Answers keyed by question index; a later answer to the same question replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnsweredSet {
    answers: BTreeMap<QuestionId, Answer>,
}

impl AnsweredSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from raw `question -> value` responses.
    pub fn from_responses(
        catalog: &QuestionCatalog,
        responses: &BTreeMap<QuestionId, i32>,
    ) -> Result<Self> {
        let mut set = Self::new();
        for (&index, &value) in responses {
            let question = catalog.get(index).ok_or_else(|| {
                CompassError::validation(format!("response for unknown question {index}"))
            })?;
            set.record(question, value)?;
        }
        Ok(set)
    }

    pub fn insert(&mut self, answer: Answer) -> Option<Answer> {
        self.answers.insert(answer.index, answer)
    }

    /// Records `value` as the answer to `question`, checking it against the answer scale.
    pub fn record(&mut self, question: &Question, value: i32) -> Result<Option<Answer>> {
        if !(ANSWER_MIN..=ANSWER_MAX).contains(&value) {
            return Err(CompassError::validation(format!(
                "answer {value} to question {} is outside {ANSWER_MIN}..={ANSWER_MAX}",
                question.index
            )));
        }
        Ok(self.insert(Answer::new(
            question.index,
            value,
            question.axis,
            question.multiplier,
        )))
    }

    pub fn get(&self, index: QuestionId) -> Option<&Answer> {
        self.answers.get(&index)
    }

    pub fn answers(&self) -> impl Iterator<Item = &Answer> {
        self.answers.values()
    }

    /// Projects to `question -> answer value`, the shape the affinity ranker consumes.
    pub fn responses(&self) -> BTreeMap<QuestionId, i32> {
        self.answers
            .iter()
            .map(|(&index, answer)| (index, answer.answer_value))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl FromIterator<Answer> for AnsweredSet {
    fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
        let mut set = Self::new();
        for answer in iter {
            set.insert(answer);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(index: QuestionId, axis: Axis, short: bool) -> Question {
        Question {
            index,
            axis,
            multiplier: Multiplier::Positive,
            short,
            theme: None,
            text: None,
        }
    }

    #[test]
    fn axis_parses_source_labels() {
        assert_eq!("económico".parse::<Axis>().unwrap(), Axis::Economic);
        assert_eq!("Social".parse::<Axis>().unwrap(), Axis::Social);
        assert_eq!("política".parse::<Axis>().unwrap(), Axis::Political);
        assert_eq!("political".parse::<Axis>().unwrap(), Axis::Political);
    }

    #[test]
    fn axis_rejects_unknown_label() {
        let err = "cultural".parse::<Axis>().unwrap_err();
        assert!(matches!(err, CompassError::Validation(_)));
    }

    #[test]
    fn multiplier_only_accepts_unit_values() {
        assert_eq!(Multiplier::try_from(-1).unwrap(), Multiplier::Negative);
        assert!(matches!(
            Multiplier::try_from(2),
            Err(CompassError::Validation(_))
        ));
    }

    #[test]
    fn question_deserializes_with_type_field() {
        let q: Question =
            serde_json::from_str(r#"{"index": 3, "type": "económico", "multiplier": -1}"#)
                .unwrap();
        assert_eq!(q.axis, Axis::Economic);
        assert_eq!(q.multiplier, Multiplier::Negative);
        assert!(!q.short);
    }

    #[test]
    fn question_with_bad_axis_fails_to_deserialize() {
        let parsed: std::result::Result<Question, _> =
            serde_json::from_str(r#"{"index": 3, "type": "weird", "multiplier": 1}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn catalog_rejects_duplicate_indices() {
        let err = QuestionCatalog::new(vec![
            question(0, Axis::Social, true),
            question(0, Axis::Economic, false),
        ])
        .unwrap_err();
        assert!(matches!(err, CompassError::Validation(_)));
    }

    #[test]
    fn full_form_puts_short_questions_first() {
        let catalog = QuestionCatalog::new(vec![
            question(0, Axis::Social, false),
            question(1, Axis::Economic, true),
            question(2, Axis::Political, false),
            question(3, Axis::Social, true),
        ])
        .unwrap();
        let order: Vec<_> = catalog.full_form().iter().map(|q| q.index).collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
        let short: Vec<_> = catalog.short_form().iter().map(|q| q.index).collect();
        assert_eq!(short, vec![1, 3]);
    }

    #[test]
    fn record_overwrites_previous_answer() {
        let q = question(5, Axis::Social, true);
        let mut set = AnsweredSet::new();
        assert!(set.record(&q, 1).unwrap().is_none());
        let previous = set.record(&q, -2).unwrap();
        assert_eq!(previous.map(|a| a.answer_value), Some(1));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(5).unwrap().answer_value, -2);
    }

    #[test]
    fn record_rejects_values_off_scale() {
        let q = question(0, Axis::Social, true);
        let mut set = AnsweredSet::new();
        assert!(matches!(
            set.record(&q, 3),
            Err(CompassError::Validation(_))
        ));
        assert!(set.is_empty());
    }

    #[test]
    fn from_responses_rejects_unknown_question() {
        let catalog = QuestionCatalog::new(vec![question(0, Axis::Social, true)]).unwrap();
        let responses = BTreeMap::from([(0, 1), (9, 2)]);
        assert!(AnsweredSet::from_responses(&catalog, &responses).is_err());
    }

    #[test]
    fn responses_projects_answer_values() {
        let set: AnsweredSet = vec![
            Answer::new(2, -1, Axis::Economic, Multiplier::Negative),
            Answer::new(0, 2, Axis::Social, Multiplier::Positive),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.responses(), BTreeMap::from([(0, 2), (2, -1)]));
    }
}
