//! # GitHub User Search
//!
//! A Rust library for searching GitHub users by username, location and
//! minimum repository count, with page-by-page accumulation of results.
//!
//! ## Main Components
//!
//! - [`UserFetcher`]: builds the search query and fetches one page of users
//! - [`SearchSession`]: tracks the current search, accumulated results and errors
//! - [`SearchConfig`]: API base URL and client settings passed to the fetcher
//! - [`Args`]: Command line argument structure for the bundled binary
//!
//! ## Example
//!
//! ```no_run
//! use github_user_search_lib::{SearchConfig, SearchCriteria, SearchSession, UserFetcher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let fetcher = UserFetcher::new(SearchConfig::from_env())?;
//!     let mut session = SearchSession::new();
//!
//!     // First page
//!     if let Some(pending) = session.submit(SearchCriteria::new().location("Berlin").min_repos(10)) {
//!         session.run(&fetcher, pending).await;
//!     }
//!
//!     // Second page, appended to the first
//!     if let Some(pending) = session.load_more() {
//!         session.run(&fetcher, pending).await;
//!     }
//!
//!     for user in session.results() {
//!         println!("{} {}", user.login, user.html_url);
//!     }
//!     Ok(())
//! }
//! ```

mod args;
mod config;
mod error;
mod fetcher;
mod models;
mod query;
mod render;
mod session;

// Re-export main components for documentation and external use
pub use crate::args::Args;
pub use crate::config::{SearchConfig, API_URL_ENV, DEFAULT_API_URL};
pub use crate::error::{QueryError, SessionError};
pub use crate::fetcher::UserFetcher;
pub use crate::models::{SearchResponse, UserSummary};
pub use crate::query::{build_query, Page, SearchCriteria, DEFAULT_QUERY, PER_PAGE};
pub use crate::render::{render_error, render_note, render_session, render_user, Theme};
pub use crate::session::{Completion, PendingFetch, SearchSession};
