use std::env;

/// Environment variable holding the backend's base url
pub const API_URL_ENV: &str = "TURKANIME_API_URL";
/// Local development backend
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_owned(),
        }
    }
}

impl ApiConfig {
    /// Read the config from the environment. An unset or empty variable uses the default url
    pub fn from_env() -> Self {
        Self::from_value(env::var(API_URL_ENV).ok())
    }

    fn from_value(value: Option<String>) -> Self {
        match value {
            Some(url) if !url.trim().is_empty() => Self {
                base_url: url.trim().to_owned(),
            },
            _ => Self::default(),
        }
    }
}
