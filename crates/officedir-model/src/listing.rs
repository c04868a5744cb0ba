use crate::geo::MapMarker;
use crate::slug::{Slug, ValidationError};
use serde::{Deserialize, Serialize};

/// Named geographic sub-area of the city. Buildings and coworking spaces
/// are grouped under a submarket by case-insensitive label match on the
/// `building_filter` / `coworking_filter` strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submarket {
    pub id: Slug,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coworking_filter: Option<String>,
}

impl Submarket {
    pub fn validate(&self) -> Result<(), ValidationError> {
        // Serde's transparent newtype skips parsing, so re-check ids that
        // arrived from disk.
        Slug::parse(self.id.as_str())?;
        if self.name.trim().is_empty() {
            return Err(ValidationError(format!(
                "submarket {} has an empty name",
                self.id
            )));
        }
        if !crate::geo::Coordinates::new(self.lat, self.lng).is_valid() {
            return Err(ValidationError(format!(
                "submarket {} has out-of-range coordinates",
                self.id
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn marker(&self) -> MapMarker {
        MapMarker {
            lat: self.lat,
            lng: self.lng,
            label: self.name.clone(),
        }
    }

    /// True when the record's free-text submarket label matches this
    /// submarket's building filter.
    #[must_use]
    pub fn matches_building(&self, label: Option<&str>) -> bool {
        matches_filter(self.building_filter.as_deref(), label)
    }

    #[must_use]
    pub fn matches_coworking(&self, label: Option<&str>) -> bool {
        matches_filter(self.coworking_filter.as_deref(), label)
    }
}

fn matches_filter(filter: Option<&str>, label: Option<&str>) -> bool {
    match filter {
        // A submarket without a filter groups nothing.
        None => false,
        Some(f) => label
            .map(|l| l.trim().eq_ignore_ascii_case(f.trim()))
            .unwrap_or(false),
    }
}

/// Office building directory entry. Free-text fields mirror what the
/// advisory team publishes; only identity and name are mandatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub id: Slug,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submarket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub built_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

impl Building {
    pub fn validate(&self) -> Result<(), ValidationError> {
        Slug::parse(self.id.as_str())?;
        if self.name.trim().is_empty() {
            return Err(ValidationError(format!(
                "building {} has an empty name",
                self.id
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn marker(&self) -> Option<MapMarker> {
        MapMarker::try_new(self.lat, self.lng, &self.name)
    }
}

/// Coworking directory entry. `location` carries the street address;
/// the field name is historical and preserved on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoworkingSpace {
    pub id: Slug,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submarket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

impl CoworkingSpace {
    pub fn validate(&self) -> Result<(), ValidationError> {
        Slug::parse(self.id.as_str())?;
        if self.name.trim().is_empty() {
            return Err(ValidationError(format!(
                "coworking space {} has an empty name",
                self.id
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn marker(&self) -> Option<MapMarker> {
        MapMarker::try_new(self.lat, self.lng, &self.name)
    }
}
