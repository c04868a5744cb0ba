// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::routing::{delete, get, post};
use axum::Router;
use officedir_store::DirectoryStore;
use std::sync::atomic::{AtomicBool, AtomicU64};
use std::sync::Arc;

mod config;
mod http;
mod outbound;
mod request_id;
mod response;

pub use config::ApiConfig;
pub use outbound::geocode::{GeocodeAddress, GeocodeSuggestion, Geocoder};
pub use outbound::mailer::{Mailer, OutboundError};

pub const CRATE_NAME: &str = "officedir-server";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DirectoryStore>,
    pub api: Arc<ApiConfig>,
    pub mailer: Option<Arc<Mailer>>,
    pub geocoder: Arc<Geocoder>,
    pub ready: Arc<AtomicBool>,
    pub(crate) request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(store: DirectoryStore, api: ApiConfig) -> Self {
        let geocoder = Arc::new(Geocoder::new(&api));
        let mailer = Mailer::from_config(&api).map(Arc::new);
        Self {
            store: Arc::new(store),
            api: Arc::new(api),
            mailer,
            geocoder,
            ready: Arc::new(AtomicBool::new(true)),
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.api.max_body_bytes;
    Router::new()
        .route("/", get(http::system::landing_handler))
        .route("/healthz", get(http::system::healthz_handler))
        .route("/readyz", get(http::system::readyz_handler))
        .route("/v1/version", get(http::system::version_handler))
        .route("/v1/buildings", get(http::directory::buildings_handler))
        .route(
            "/v1/buildings/:slug",
            get(http::directory::building_handler),
        )
        .route("/v1/submarkets", get(http::directory::submarkets_handler))
        .route(
            "/v1/submarkets/:id",
            get(http::directory::submarket_handler),
        )
        .route(
            "/v1/submarkets/:id/buildings",
            get(http::directory::submarket_buildings_handler),
        )
        .route(
            "/v1/submarkets/:id/coworking",
            get(http::directory::submarket_coworking_handler),
        )
        .route("/v1/coworking", get(http::directory::coworking_handler))
        .route(
            "/v1/coworking/:slug",
            get(http::directory::coworking_space_handler),
        )
        .route("/v1/references", get(http::directory::references_handler))
        .route("/v1/markers", get(http::directory::markers_handler))
        .route(
            "/v1/companies",
            get(http::companies::list_companies_handler)
                .post(http::companies::create_company_handler),
        )
        .route(
            "/v1/posts",
            get(http::posts::list_posts_handler).post(http::posts::upsert_post_handler),
        )
        .route("/v1/posts/:id", delete(http::posts::delete_post_handler))
        .route("/v1/insights", get(http::insights::list_insights_handler))
        .route(
            "/v1/insights/:slug",
            get(http::insights::insight_handler),
        )
        .route("/v1/contact", post(http::contact::contact_handler))
        .route(
            "/v1/geocode",
            get(http::geocode::geocode_handler),
        )
        .route(
            "/v1/calculator/spaces",
            get(http::calculator::spaces_handler),
        )
        .route(
            "/v1/calculator/estimate",
            post(http::calculator::estimate_handler),
        )
        .route(
            "/v1/calculator/leads",
            post(http::calculator::lead_handler),
        )
        .layer(from_fn_with_state(
            state.clone(),
            request_id::request_tracing_middleware,
        ))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}
