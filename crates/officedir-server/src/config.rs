// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use std::time::Duration;

/// Service configuration, normally assembled from the environment by the
/// binary. Defaults run against the bundled fixtures with outbound mail
/// disabled.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub data_root: PathBuf,
    pub max_body_bytes: usize,
    pub outbound_timeout: Duration,
    /// Transactional-email API key. Absent means the contact endpoint
    /// answers with a configuration error.
    pub mail_api_key: Option<String>,
    pub mail_base_url: String,
    pub mail_from_email: String,
    pub mail_from_name: String,
    pub mail_to_email: String,
    pub mail_to_name: String,
    pub geocode_base_url: String,
    /// Appended to free-text address queries to keep suggestions local.
    pub geocode_city_hint: String,
    pub geocode_limit: usize,
    pub geocode_min_query_len: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            data_root: PathBuf::from("data"),
            max_body_bytes: 256 * 1024,
            outbound_timeout: Duration::from_secs(10),
            mail_api_key: None,
            mail_base_url: "https://api.mailersend.com".to_string(),
            mail_from_email: "noreply@officedir.example".to_string(),
            mail_from_name: "Contact Form".to_string(),
            mail_to_email: "advisory@officedir.example".to_string(),
            mail_to_name: "Advisory Team".to_string(),
            geocode_base_url: "https://nominatim.openstreetmap.org".to_string(),
            geocode_city_hint: "Calgary".to_string(),
            geocode_limit: 5,
            geocode_min_query_len: 3,
        }
    }
}
