//! Loads survey data files. JSON unless the extension is `.yaml`/`.yml`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::types::{ProfileTable, QuestionCatalog, QuestionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => DataFormat::Yaml,
            _ => DataFormat::Json,
        }
    }
}

pub fn parse_str<T: DeserializeOwned>(raw: &str, format: DataFormat) -> Result<T> {
    Ok(match format {
        DataFormat::Json => serde_json::from_str(raw)?,
        DataFormat::Yaml => serde_yaml::from_str(raw)?,
    })
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)?;
    let format = DataFormat::from_path(path);
    tracing::debug!("loading {} as {:?}", path.display(), format);
    parse_str(&raw, format)
}

/// Question list: `[{"index", "type", "multiplier", "short"?, ...}]`.
pub fn load_questions(path: &Path) -> Result<QuestionCatalog> {
    load(path)
}

/// Raw responses: `{questionId: value}`.
pub fn load_responses(path: &Path) -> Result<BTreeMap<QuestionId, i32>> {
    load(path)
}

/// Profile table: `{profileId: {questionId: value}}`, order preserved.
/// Values outside the answer scale are a validation error.
pub fn load_profiles(path: &Path) -> Result<ProfileTable> {
    let table: ProfileTable = load(path)?;
    table.validate()?;
    Ok(table)
}
