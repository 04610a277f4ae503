use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use tracing::{debug, error, info, warn};

use crate::config::SearchConfig;
use crate::error::QueryError;
use crate::models::{SearchResponse, UserSummary};
use crate::query::{build_query, Page, SearchCriteria, PER_PAGE};

/// Issues user searches against the configured endpoint.
///
/// Holds no per-request state, so one fetcher can serve any number of
/// concurrent calls.
#[derive(Debug, Clone)]
pub struct UserFetcher {
    client: Client,
    search_url: String,
}

impl UserFetcher {
    /// Create a new UserFetcher from an explicit configuration
    pub fn new(config: SearchConfig) -> Result<Self, QueryError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static("2022-11-28"));

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(QueryError::Client)?;

        Ok(UserFetcher {
            client,
            search_url: config.search_url(),
        })
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    /// Fetch one page of users matching `criteria`.
    ///
    /// A page past the end of the results comes back as an empty list, not an error.
    pub async fn fetch_users(
        &self,
        criteria: &SearchCriteria,
        page: Page,
    ) -> Result<Vec<UserSummary>, QueryError> {
        let query = build_query(criteria);
        let page_param = page.get().to_string();
        let per_page_param = PER_PAGE.to_string();

        debug!("Requesting {} q='{}' page={}", self.search_url, query, page);
        let response = self
            .client
            .get(&self.search_url)
            .query(&[
                ("q", query.as_str()),
                ("page", page_param.as_str()),
                ("per_page", per_page_param.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                error!("Request for '{}' page {} failed: {}", query, page, e);
                QueryError::Transport(e)
            })?;

        log_rate_limit(response.headers());

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("API error: {} on '{}' page {}", status, query, page);
            return Err(QueryError::Status { status, body });
        }

        let search: SearchResponse = response.json().await.map_err(QueryError::Decode)?;

        if search.incomplete_results {
            warn!("Upstream returned incomplete results for '{}' page {}", query, page);
        }
        info!(
            "Fetched {} users for '{}' page {} (total {})",
            search.items.len(),
            query,
            page,
            search
                .total_count
                .map(|n| n.to_string())
                .unwrap_or_else(|| "unknown".to_string())
        );

        Ok(search.items)
    }
}

/// Search budget reported in the `X-RateLimit-*` response headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RateLimit {
    remaining: u64,
    limit: u64,
    reset: Option<DateTime<Utc>>,
}

/// Parse the rate-limit headers. `None` unless both remaining and limit are present.
fn parse_rate_limit(headers: &HeaderMap) -> Option<RateLimit> {
    let header_u64 = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
    };

    Some(RateLimit {
        remaining: header_u64("X-RateLimit-Remaining")?,
        limit: header_u64("X-RateLimit-Limit")?,
        reset: header_u64("X-RateLimit-Reset")
            .and_then(|secs| i64::try_from(secs).ok())
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0)),
    })
}

/// Log the remaining search budget reported by the API.
fn log_rate_limit(headers: &HeaderMap) {
    let Some(rate) = parse_rate_limit(headers) else {
        return;
    };

    debug!("Rate limit: {}/{}", rate.remaining, rate.limit);

    if rate.remaining == 0 {
        match rate.reset {
            Some(at) => warn!("Rate limit reached; resets at {}", at.format("%H:%M:%S UTC")),
            None => warn!("Rate limit reached"),
        }
    }
}
