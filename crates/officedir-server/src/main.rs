#![forbid(unsafe_code)]

use officedir_server::{build_router, ApiConfig, AppState};
use officedir_store::DirectoryStore;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

fn env_string(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_opt_string(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn config_from_env() -> ApiConfig {
    let defaults = ApiConfig::default();
    ApiConfig {
        data_root: PathBuf::from(env_string("OFFICEDIR_DATA_ROOT", "data")),
        max_body_bytes: env_usize("OFFICEDIR_MAX_BODY_BYTES", defaults.max_body_bytes),
        outbound_timeout: Duration::from_millis(env_u64(
            "OFFICEDIR_OUTBOUND_TIMEOUT_MS",
            defaults.outbound_timeout.as_millis() as u64,
        )),
        mail_api_key: env_opt_string("OFFICEDIR_MAIL_API_KEY"),
        mail_base_url: env_string("OFFICEDIR_MAIL_BASE_URL", &defaults.mail_base_url),
        mail_from_email: env_string("OFFICEDIR_MAIL_FROM", &defaults.mail_from_email),
        mail_from_name: env_string("OFFICEDIR_MAIL_FROM_NAME", &defaults.mail_from_name),
        mail_to_email: env_string("OFFICEDIR_MAIL_TO", &defaults.mail_to_email),
        mail_to_name: env_string("OFFICEDIR_MAIL_TO_NAME", &defaults.mail_to_name),
        geocode_base_url: env_string("OFFICEDIR_GEOCODE_BASE_URL", &defaults.geocode_base_url),
        geocode_city_hint: env_string("OFFICEDIR_GEOCODE_CITY", &defaults.geocode_city_hint),
        geocode_limit: env_usize("OFFICEDIR_GEOCODE_LIMIT", defaults.geocode_limit),
        geocode_min_query_len: defaults.geocode_min_query_len,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("OFFICEDIR_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        error!("failed to install ctrl-c handler; running until killed");
        std::future::pending::<()>().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = config_from_env();
    let bind = env_string("OFFICEDIR_BIND", "0.0.0.0:8080");
    let store = DirectoryStore::new(config.data_root.clone());
    let mail_configured = config.mail_api_key.is_some();
    let state = AppState::new(store, config);
    let app = build_router(state);

    let listener = TcpListener::bind(&bind).await?;
    info!(
        bind = %bind,
        mail_configured,
        "officedir server listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
