use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// The breakdown the model is asked to produce for one word.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EtymologyResponse {
    #[serde(default, deserialize_with = "lenient_word")]
    pub word: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_text"
    )]
    pub overall_etymology: Option<String>,
    #[serde(default, deserialize_with = "lenient_morphemes")]
    pub morphemes: Vec<MorphemeEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MorphemeEntry {
    pub morpheme: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
}

impl EtymologyResponse {
    pub fn overall(&self) -> Option<&str> {
        self.overall_etymology
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.overall().is_none() && self.morphemes.is_empty()
    }
}

/// Any string, or nothing for `null` and other JSON types.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Null => Ok(None),
        other => {
            debug!("Ignoring non-string text field: {}", other);
            Ok(None)
        }
    }
}

fn lenient_word<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

/// Keeps the entries that look like morphemes and drops the rest. A `null`
/// list is the same as an empty one.
fn lenient_morphemes<'de, D>(deserializer: D) -> Result<Vec<MorphemeEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<serde_json::Value>> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    let total = raw.len();
    let entries: Vec<MorphemeEntry> = raw
        .into_iter()
        .filter_map(|value| serde_json::from_value::<MorphemeEntry>(value).ok())
        .filter(|entry| !entry.morpheme.trim().is_empty())
        .collect();

    if entries.len() < total {
        debug!(
            "Skipped {} malformed morpheme entries",
            total - entries.len()
        );
    }

    Ok(entries)
}
