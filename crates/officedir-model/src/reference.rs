use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One vetted professional on the reference list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub firm: String,
    pub specialty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Category key -> entries. Keys come straight from the data file.
pub type ReferenceBook = BTreeMap<String, Vec<ReferenceEntry>>;

/// Display label for a reference category; unknown keys fall through
/// unchanged.
#[must_use]
pub fn category_label(key: &str) -> &str {
    match key {
        "designers" => "Designers",
        "lawFirms" => "Law Firms",
        other => other,
    }
}
