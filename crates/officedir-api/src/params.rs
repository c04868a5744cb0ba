// SPDX-License-Identifier: Apache-2.0

use crate::ApiError;
use std::collections::HashMap;

pub const DEFAULT_LIMIT: usize = 100;
pub const MAX_LIMIT: usize = 500;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub limit: usize,
    pub submarket: Option<String>,
    pub q: Option<String>,
}

/// Parse common list-endpoint parameters. A non-numeric `limit` is an
/// error; an out-of-range one clamps.
pub fn parse_list_params(params: &HashMap<String, String>) -> Result<ListParams, ApiError> {
    let limit = match params.get("limit") {
        None => DEFAULT_LIMIT,
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| ApiError::invalid_param("limit", raw))?
            .clamp(1, MAX_LIMIT),
    };
    let non_empty = |key: &str| {
        params
            .get(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };
    Ok(ListParams {
        limit,
        submarket: non_empty("submarket"),
        q: non_empty("q"),
    })
}

/// Case-insensitive substring match used by the free-text `q` filter.
#[must_use]
pub fn text_matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_with_no_parameters() {
        let parsed = parse_list_params(&HashMap::new()).expect("parse");
        assert_eq!(parsed.limit, DEFAULT_LIMIT);
        assert!(parsed.submarket.is_none());
        assert!(parsed.q.is_none());
    }

    #[test]
    fn limit_clamps_to_bounds() {
        let parsed = parse_list_params(&params(&[("limit", "100000")])).expect("parse");
        assert_eq!(parsed.limit, MAX_LIMIT);
        let parsed = parse_list_params(&params(&[("limit", "0")])).expect("parse");
        assert_eq!(parsed.limit, 1);
    }

    #[test]
    fn non_numeric_limit_is_rejected() {
        assert!(parse_list_params(&params(&[("limit", "lots")])).is_err());
    }

    #[test]
    fn blank_filters_are_dropped() {
        let parsed = parse_list_params(&params(&[("submarket", "  "), ("q", "tower")]))
            .expect("parse");
        assert!(parsed.submarket.is_none());
        assert_eq!(parsed.q.as_deref(), Some("tower"));
    }

    #[test]
    fn text_match_ignores_case() {
        assert!(text_matches("Bankers Hall", "hall"));
        assert!(!text_matches("Bankers Hall", "bow"));
    }
}
