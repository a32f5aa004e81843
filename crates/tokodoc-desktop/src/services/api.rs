//! Backend client construction from the environment.

use tokodoc_core::api::ApiClient;

const API_URL_ENV: &str = "TOKODOC_API_URL";
const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Build the backend client from `TOKODOC_API_URL`, falling back to the
/// local development backend when the variable is absent or unusable.
#[must_use]
pub fn api_client_from_env() -> ApiClient {
    if let Ok(url) = std::env::var(API_URL_ENV) {
        match ApiClient::new(&url) {
            Ok(client) => return client,
            Err(error) => {
                tracing::warn!("Ignoring {API_URL_ENV}={url}: {error}");
            }
        }
    }
    ApiClient::new(DEFAULT_API_URL).expect("default API URL is well-formed")
}
