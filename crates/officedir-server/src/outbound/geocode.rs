// SPDX-License-Identifier: Apache-2.0

use crate::config::ApiConfig;
use crate::outbound::mailer::OutboundError;
use serde::{Deserialize, Serialize};

/// Structured address parts from the lookup service. Only the parts the
/// suggestion formatter needs are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeocodeAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub road: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub town: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub village: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeocodeSuggestion {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub lat: String,
    #[serde(default)]
    pub lon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<GeocodeAddress>,
}

impl GeocodeSuggestion {
    /// "house_number road, city, state", falling back to the service's
    /// display name when the parts are missing.
    #[must_use]
    pub fn formatted(&self) -> String {
        let Some(addr) = &self.address else {
            return self.display_name.clone();
        };
        let mut out = String::new();
        match (&addr.house_number, &addr.road) {
            (Some(number), Some(road)) => {
                out.push_str(number);
                out.push(' ');
                out.push_str(road);
            }
            (None, Some(road)) => out.push_str(road),
            _ => {}
        }
        if let Some(city) = addr.city.as_ref().or(addr.town.as_ref()).or(addr.village.as_ref()) {
            if !out.is_empty() {
                out.push_str(", ");
            }
            out.push_str(city);
        }
        if let Some(state) = &addr.state {
            if !out.is_empty() {
                out.push_str(", ");
            }
            out.push_str(state);
        }
        if out.is_empty() {
            self.display_name.clone()
        } else {
            out
        }
    }
}

/// Address autocomplete against a public lookup service. No API key, no
/// caching; short queries never leave the process.
pub struct Geocoder {
    client: reqwest::Client,
    base_url: String,
    city_hint: String,
    limit: usize,
    min_query_len: usize,
}

impl Geocoder {
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(config.outbound_timeout)
                .user_agent(concat!("officedir/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_default(),
            base_url: config.geocode_base_url.trim_end_matches('/').to_string(),
            city_hint: config.geocode_city_hint.clone(),
            limit: config.geocode_limit,
            min_query_len: config.geocode_min_query_len,
        }
    }

    pub async fn search(&self, query: &str) -> Result<Vec<GeocodeSuggestion>, OutboundError> {
        let query = query.trim();
        if query.len() < self.min_query_len {
            return Ok(Vec::new());
        }
        let hinted = if self.city_hint.is_empty() {
            query.to_string()
        } else {
            format!("{query}, {}", self.city_hint)
        };
        let limit = self.limit.to_string();
        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("format", "json"),
                ("q", hinted.as_str()),
                ("limit", limit.as_str()),
                ("addressdetails", "1"),
            ])
            .send()
            .await
            .map_err(|e| OutboundError(format!("address lookup failed: {e}")))?;
        if !response.status().is_success() {
            return Err(OutboundError(format!(
                "address lookup returned {}",
                response.status()
            )));
        }
        response
            .json::<Vec<GeocodeSuggestion>>()
            .await
            .map_err(|e| OutboundError(format!("address lookup returned bad payload: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatted_prefers_structured_parts() {
        let suggestion = GeocodeSuggestion {
            display_name: "855, 2 Street Southwest, Calgary, Alberta, Canada".to_string(),
            address: Some(GeocodeAddress {
                house_number: Some("855".to_string()),
                road: Some("2 Street SW".to_string()),
                city: Some("Calgary".to_string()),
                state: Some("Alberta".to_string()),
                ..GeocodeAddress::default()
            }),
            ..GeocodeSuggestion::default()
        };
        assert_eq!(suggestion.formatted(), "855 2 Street SW, Calgary, Alberta");
    }

    #[test]
    fn formatted_falls_back_to_town_then_display_name() {
        let town_only = GeocodeSuggestion {
            display_name: "fallback".to_string(),
            address: Some(GeocodeAddress {
                road: Some("Main Street".to_string()),
                town: Some("Cochrane".to_string()),
                ..GeocodeAddress::default()
            }),
            ..GeocodeSuggestion::default()
        };
        assert_eq!(town_only.formatted(), "Main Street, Cochrane");

        let bare = GeocodeSuggestion {
            display_name: "Somewhere, Alberta".to_string(),
            ..GeocodeSuggestion::default()
        };
        assert_eq!(bare.formatted(), "Somewhere, Alberta");
    }
}
