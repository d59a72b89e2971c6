pub mod api;
pub mod backend;
pub mod config;
pub mod errors;
pub mod objects;
pub mod view;

mod api_request;
mod utils;

use std::sync::{Arc, LazyLock};

use reqwest::ClientBuilder;
use tokio::runtime::Runtime;
use url::Url;

pub use crate::{
    backend::AnimeBackend,
    config::ApiConfig,
    errors::{ApiError, ClientError},
};
use crate::{
    api::{anilist::AniListApi, anime::AnimeApi, health::HealthApi, titles::TitlesApi},
    api_request::ApiRequest,
};

const API_PREFIX: &str = "/api";

// drives the `send_blocking` variants
static RUNTIME: LazyLock<Runtime> = LazyLock::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to build blocking runtime")
});

/// Handle to the backend. Cloning is cheap and shares the connection pool.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    // never ends with a slash, paths are appended as-is
    base_url: Arc<str>,
}

impl Client {
    /// Create client
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION"),
            ))
            .build()?;

        Self::with_http(base_url, http)
    }

    /// Create client with custom reqwest settings (user agent for example)
    pub fn new_with_http(
        base_url: &str,
        builder_cb: impl FnOnce(ClientBuilder) -> ClientBuilder,
    ) -> Result<Self, ClientError> {
        let http = builder_cb(reqwest::Client::builder()).build()?;

        Self::with_http(base_url, http)
    }

    /// Create client pointed at the url from `TURKANIME_API_URL`, or the local default
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_config(&ApiConfig::from_env())
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ClientError> {
        Self::new(&config.base_url)
    }

    fn with_http(base_url: &str, http: reqwest::Client) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url)?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::CannotBeABase(base_url.to_owned()));
        }
        // endpoint paths are appended to the end of the url
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ClientError::QueryOrFragment(base_url.to_owned()));
        }

        let base_url = parsed.as_str().trim_end_matches('/').into();

        Ok(Self { http, base_url })
    }

    /// The configured base url, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Anime listings, search and details
    pub fn anime(&self) -> AnimeApi {
        AnimeApi::new(self.clone())
    }

    /// Title matching and normalization
    pub fn titles(&self) -> TitlesApi {
        TitlesApi::new(self.clone())
    }

    /// Tracking service account, list and progress
    pub fn anilist(&self) -> AniListApi {
        AniListApi::new(self.clone())
    }

    /// Backend liveness
    pub fn health(&self) -> HealthApi {
        HealthApi::new(self.clone())
    }

    pub(crate) fn request(&self) -> ApiRequest {
        ApiRequest::new(self.http.clone(), self.base_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_drops_trailing_slash() {
        let client = Client::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");

        let client = Client::new("https://example.com/backend/").unwrap();
        assert_eq!(client.base_url(), "https://example.com/backend");
    }

    #[test]
    fn rejects_invalid_base_url() {
        assert!(matches!(
            Client::new("not a url"),
            Err(ClientError::BaseUrl(_))
        ));
        assert!(matches!(
            Client::new("mailto:someone@example.com"),
            Err(ClientError::CannotBeABase(_))
        ));
        assert!(matches!(
            Client::new("http://localhost:8000/?x=1"),
            Err(ClientError::QueryOrFragment(_))
        ));
        assert!(matches!(
            Client::new("http://localhost:8000/#top"),
            Err(ClientError::QueryOrFragment(_))
        ));
    }

    #[test]
    fn default_config_points_at_localhost() {
        let client = Client::from_config(&ApiConfig::default()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
