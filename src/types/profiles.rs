//! Reference profiles and the affinity rankings computed against them.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CompassError, Result};
use crate::types::answers::{QuestionId, ANSWER_MAX, ANSWER_MIN};

/// Canonical answers of one comparison target (e.g. a party).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceProfile {
    pub id: String,
    pub answers: BTreeMap<QuestionId, i32>,
}

impl ReferenceProfile {
    pub fn new(id: impl Into<String>, answers: BTreeMap<QuestionId, i32>) -> Self {
        Self {
            id: id.into(),
            answers,
        }
    }

    pub fn get(&self, question: QuestionId) -> Option<i32> {
        self.answers.get(&question).copied()
    }

    /// Fails on the first value outside the answer scale.
    pub fn validate(&self) -> Result<()> {
        match self
            .answers
            .iter()
            .find(|(_, value)| !(ANSWER_MIN..=ANSWER_MAX).contains(*value))
        {
            Some((question, value)) => Err(CompassError::validation(format!(
                "profile '{}' answers {value} to question {question}, outside {ANSWER_MIN}..={ANSWER_MAX}",
                self.id
            ))),
            None => Ok(()),
        }
    }
}

/// Reference profiles in insertion order with unique ids.
///
/// On the wire this is a map `profileId -> {questionId -> value}`; document
/// order is kept because it breaks ties in the affinity ranking.
/// Deserializing only rejects duplicate ids; call [`ProfileTable::validate`]
/// to check values against the answer scale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileTable {
    profiles: Vec<ReferenceProfile>,
}

impl ProfileTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `profile`, rejecting duplicate ids and off-scale values.
    pub fn push(&mut self, profile: ReferenceProfile) -> Result<()> {
        profile.validate()?;
        self.push_unique(profile)
    }

    fn push_unique(&mut self, profile: ReferenceProfile) -> Result<()> {
        if self.get(&profile.id).is_some() {
            return Err(CompassError::validation(format!(
                "duplicate profile id '{}'",
                profile.id
            )));
        }
        self.profiles.push(profile);
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.profiles.iter().try_for_each(ReferenceProfile::validate)
    }

    pub fn get(&self, id: &str) -> Option<&ReferenceProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReferenceProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl TryFrom<Vec<ReferenceProfile>> for ProfileTable {
    type Error = CompassError;

    fn try_from(profiles: Vec<ReferenceProfile>) -> Result<Self> {
        let mut table = ProfileTable::new();
        for profile in profiles {
            table.push(profile)?;
        }
        Ok(table)
    }
}

impl Serialize for ProfileTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.profiles.len()))?;
        for profile in &self.profiles {
            map.serialize_entry(&profile.id, &profile.answers)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ProfileTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = ProfileTable;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of profile id to {question id: answer}")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<ProfileTable, A::Error> {
                let mut table = ProfileTable::new();
                while let Some((id, answers)) =
                    access.next_entry::<String, BTreeMap<QuestionId, i32>>()?
                {
                    table
                        .push_unique(ReferenceProfile::new(id, answers))
                        .map_err(serde::de::Error::custom)?;
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}

/// One row of an affinity ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffinityEntry {
    pub profile_id: String,
    /// Similarity in [0, 1].
    pub score: f64,
}

impl AffinityEntry {
    /// Score as a whole percentage, rounded half up.
    pub fn percent(&self) -> u32 {
        (self.score * 100.0 + 0.5).floor() as u32
    }
}

/// Affinity entries sorted by descending score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AffinityTable {
    entries: Vec<AffinityEntry>,
}

impl AffinityTable {
    pub(crate) fn from_sorted(entries: Vec<AffinityEntry>) -> Self {
        Self { entries }
    }

    /// Best match, if any profile was scored.
    pub fn top(&self) -> Option<&AffinityEntry> {
        self.entries.first()
    }

    pub fn get(&self, profile_id: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.profile_id == profile_id)
            .map(|e| e.score)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AffinityEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[AffinityEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
