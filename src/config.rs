use std::env;
use std::time::Duration;

/// Base URL used when `GITHUB_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "GITHUB_API_URL";

const SEARCH_USERS_PATH: &str = "/search/users";

/// Settings for a [`UserFetcher`](crate::UserFetcher).
///
/// Built once and handed to the fetcher; the fetcher never reads the
/// environment on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub api_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: format!("github-user-search/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(30),
        }
    }
}

impl SearchConfig {
    /// Defaults, with the base URL taken from `GITHUB_API_URL` when it is set and non-blank.
    pub fn from_env() -> Self {
        let config = Self::default();
        match env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => config.with_api_url(url),
            _ => config,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim().to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the user search endpoint.
    pub fn search_url(&self) -> String {
        format!("{}{}", self.api_url.trim_end_matches('/'), SEARCH_USERS_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_github() {
        let config = SearchConfig::default();
        assert_eq!(config.search_url(), "https://api.github.com/search/users");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let config = SearchConfig::default().with_api_url(" http://localhost:8080/ ");
        assert_eq!(config.search_url(), "http://localhost:8080/search/users");
    }
}
