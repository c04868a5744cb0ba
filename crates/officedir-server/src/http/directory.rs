// SPDX-License-Identifier: Apache-2.0

use crate::request_id::propagated_request_id;
use crate::response::{api_error_response, etag_json_response};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::Json;
use officedir_api::params::{parse_list_params, text_matches};
use officedir_api::ApiError;
use officedir_model::{category_label, Building, CoworkingSpace};
use officedir_store::MarkerSource;
use serde_json::json;
use std::collections::HashMap;

fn building_matches_text(building: &Building, needle: &str) -> bool {
    text_matches(&building.name, needle)
        || building
            .address
            .as_deref()
            .is_some_and(|v| text_matches(v, needle))
        || building
            .description
            .as_deref()
            .is_some_and(|v| text_matches(v, needle))
}

fn coworking_matches_text(space: &CoworkingSpace, needle: &str) -> bool {
    text_matches(&space.name, needle)
        || space
            .location
            .as_deref()
            .is_some_and(|v| text_matches(v, needle))
        || space
            .description
            .as_deref()
            .is_some_and(|v| text_matches(v, needle))
}

pub(crate) async fn buildings_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let list = match parse_list_params(&params) {
        Ok(list) => list,
        Err(err) => return api_error_response(err.with_request_id(&request_id)),
    };
    let buildings: Vec<Building> = state
        .store
        .buildings()
        .into_iter()
        .filter(|b| {
            list.submarket.as_deref().is_none_or(|wanted| {
                b.submarket
                    .as_deref()
                    .is_some_and(|have| have.trim().eq_ignore_ascii_case(wanted.trim()))
            })
        })
        .filter(|b| list.q.as_deref().is_none_or(|q| building_matches_text(b, q)))
        .take(list.limit)
        .collect();
    etag_json_response(&headers, &buildings)
}

pub(crate) async fn building_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    match state.store.building(&slug) {
        Some(building) => Json(building).into_response(),
        None => api_error_response(ApiError::not_found("building").with_request_id(&request_id)),
    }
}

pub(crate) async fn submarkets_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    etag_json_response(&headers, &state.store.submarkets())
}

pub(crate) async fn submarket_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    match state.store.submarket(&id) {
        Some(submarket) => Json(submarket).into_response(),
        None => api_error_response(ApiError::not_found("submarket").with_request_id(&request_id)),
    }
}

pub(crate) async fn submarket_buildings_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    match state.store.submarket(&id) {
        Some(submarket) => Json(state.store.buildings_in_submarket(&submarket)).into_response(),
        None => api_error_response(ApiError::not_found("submarket").with_request_id(&request_id)),
    }
}

pub(crate) async fn submarket_coworking_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    match state.store.submarket(&id) {
        Some(submarket) => Json(state.store.coworking_in_submarket(&submarket)).into_response(),
        None => api_error_response(ApiError::not_found("submarket").with_request_id(&request_id)),
    }
}

pub(crate) async fn coworking_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let list = match parse_list_params(&params) {
        Ok(list) => list,
        Err(err) => return api_error_response(err.with_request_id(&request_id)),
    };
    let spaces: Vec<CoworkingSpace> = state
        .store
        .coworking_spaces()
        .into_iter()
        .filter(|s| {
            list.submarket.as_deref().is_none_or(|wanted| {
                s.submarket
                    .as_deref()
                    .is_some_and(|have| have.trim().eq_ignore_ascii_case(wanted.trim()))
            })
        })
        .filter(|s| list.q.as_deref().is_none_or(|q| coworking_matches_text(s, q)))
        .take(list.limit)
        .collect();
    etag_json_response(&headers, &spaces)
}

pub(crate) async fn coworking_space_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    match state.store.coworking_space(&slug) {
        Some(space) => Json(space).into_response(),
        None => {
            api_error_response(ApiError::not_found("coworking space").with_request_id(&request_id))
        }
    }
}

/// Reference list grouped by category, with display labels resolved
/// server-side.
pub(crate) async fn references_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let book = state.store.references();
    let categories: Vec<_> = book
        .iter()
        .map(|(key, entries)| {
            json!({
                "key": key,
                "label": category_label(key),
                "entries": entries,
            })
        })
        .collect();
    etag_json_response(&headers, &categories)
}

pub(crate) async fn markers_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let source = params.get("source").map_or("buildings", String::as_str);
    let source = match MarkerSource::parse(source) {
        Ok(source) => source,
        Err(_) => {
            return api_error_response(
                ApiError::invalid_param("source", source).with_request_id(&request_id),
            )
        }
    };
    etag_json_response(&headers, &state.store.markers(source))
}
