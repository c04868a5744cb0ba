use crate::geo::{MapMarker, CITY_CENTER};
use crate::slug::{slugify, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyContact {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

/// Company directory record. Self-serve submissions land here with
/// defaulted category, description and city-center coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub is_hiring: bool,
    #[serde(default)]
    pub hiring_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<CompanyContact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<DateTime<Utc>>,
}

impl Company {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError("company has an empty id".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError(format!(
                "company {} has an empty name",
                self.id
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn marker(&self) -> Option<MapMarker> {
        MapMarker::try_new(Some(self.lat), Some(self.lng), &self.name)
    }
}

/// Self-serve "add your business" submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompany {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_hiring: Option<bool>,
    #[serde(default)]
    pub hiring_link: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl NewCompany {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() || self.address.trim().is_empty() {
            return Err(ValidationError(
                "Business name and address are required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Lowercase base36 of the submission's unix-millis timestamp. Appended
/// to the slugified name so repeated submissions of the same business
/// name stay distinct.
#[must_use]
pub fn timestamp_id_suffix(now: DateTime<Utc>) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut millis = now.timestamp_millis().max(0) as u64;
    if millis == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while millis > 0 {
        out.push(DIGITS[(millis % 36) as usize]);
        millis /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

impl Company {
    /// Build a directory record from a validated submission.
    #[must_use]
    pub fn from_submission(submission: NewCompany, now: DateTime<Utc>) -> Self {
        let NewCompany {
            name,
            address,
            website,
            phone,
            is_hiring,
            hiring_link,
            first_name,
            last_name,
            email,
        } = submission;
        let first = first_name.unwrap_or_default();
        let last = last_name.unwrap_or_default();
        let description = format!(
            "Business added by {} {}",
            if first.trim().is_empty() {
                "User"
            } else {
                first.trim()
            },
            last.trim()
        )
        .trim_end()
        .to_string();
        let base = slugify(&name);
        let id = if base.is_empty() {
            format!("business-{}", timestamp_id_suffix(now))
        } else {
            format!("{base}-{}", timestamp_id_suffix(now))
        };
        Self {
            id,
            name,
            address,
            website: website.unwrap_or_default(),
            phone: phone.unwrap_or_default(),
            category: "Business".to_string(),
            description,
            lat: CITY_CENTER.lat,
            lng: CITY_CENTER.lng,
            is_hiring: is_hiring.unwrap_or(false),
            hiring_link: hiring_link.unwrap_or_default(),
            contact: Some(CompanyContact {
                first_name: first,
                last_name: last,
                email: email.unwrap_or_default(),
            }),
            added_at: Some(now),
        }
    }
}
