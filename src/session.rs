//! Client-side state for one search and its "load more" follow-ups.
//!
//! The session owns the accumulated results and decides which fetch to issue
//! next. Every fetch it hands out carries a sequence number. A completion is
//! applied only if its number matches the fetch currently in flight, so a slow
//! response from an earlier search can never overwrite a newer one, and the
//! same response can never be applied twice.

use tracing::{debug, warn};

use crate::error::{QueryError, SessionError};
use crate::fetcher::UserFetcher;
use crate::models::UserSummary;
use crate::query::{Page, SearchCriteria};
use crate::render::Theme;

/// A fetch the session has asked for and is waiting on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFetch {
    pub seq: u64,
    pub criteria: SearchCriteria,
    pub page: Page,
}

/// What [`SearchSession::complete`] did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Users were added to the results.
    Loaded { added: usize },
    /// The page was empty; there is nothing further to load.
    Exhausted,
    /// The fetch failed and the session now shows this error.
    Failed(SessionError),
    /// The response was not for the fetch in flight and was ignored.
    Discarded,
}

#[derive(Debug, Default)]
pub struct SearchSession {
    criteria: Option<SearchCriteria>,
    page: Page,
    results: Vec<UserSummary>,
    in_flight: Option<u64>,
    error: Option<SessionError>,
    exhausted: bool,
    theme: Theme,
    last_seq: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// Start a new search. Blank criteria are ignored and return `None`.
    ///
    /// Submitting while a fetch is in flight supersedes that fetch.
    pub fn submit(&mut self, criteria: SearchCriteria) -> Option<PendingFetch> {
        if criteria.is_empty() {
            debug!("Ignoring submit with empty criteria");
            return None;
        }

        self.criteria = Some(criteria.clone());
        self.page = Page::FIRST;
        self.results.clear();
        self.error = None;
        self.exhausted = false;

        Some(self.issue(criteria, Page::FIRST))
    }

    /// Ask for the page after the last one loaded.
    ///
    /// Returns `None` while busy, before any search, after a failed first page,
    /// or once the results are exhausted.
    pub fn load_more(&mut self) -> Option<PendingFetch> {
        if self.is_busy() || self.exhausted || self.error == Some(SessionError::NoResults) {
            return None;
        }
        let criteria = self.criteria.clone()?;
        self.error = None;
        let next = self.page.next();
        Some(self.issue(criteria, next))
    }

    fn issue(&mut self, criteria: SearchCriteria, page: Page) -> PendingFetch {
        self.last_seq += 1;
        self.in_flight = Some(self.last_seq);
        PendingFetch {
            seq: self.last_seq,
            criteria,
            page,
        }
    }

    /// Apply the outcome of a fetch previously handed out by this session.
    pub fn complete(
        &mut self,
        pending: PendingFetch,
        outcome: Result<Vec<UserSummary>, QueryError>,
    ) -> Completion {
        // Only the request currently in flight may change state, and only once.
        if self.in_flight != Some(pending.seq) {
            warn!(
                "Discarding stale response for page {} (request {}, latest {})",
                pending.page, pending.seq, self.last_seq
            );
            return Completion::Discarded;
        }
        self.in_flight = None;

        match outcome {
            Ok(users) if users.is_empty() => {
                self.exhausted = true;
                Completion::Exhausted
            }
            Ok(users) => {
                let added = users.len();
                self.page = pending.page;
                self.results.extend(users);
                Completion::Loaded { added }
            }
            Err(e) => {
                let error = if pending.page.is_first() {
                    self.results.clear();
                    SessionError::NoResults
                } else {
                    SessionError::NoMoreResults
                };
                debug!("Fetch for page {} failed: {}", pending.page, e);
                self.error = Some(error);
                Completion::Failed(error)
            }
        }
    }

    /// Run `pending` against `fetcher` and apply the result.
    pub async fn run(&mut self, fetcher: &UserFetcher, pending: PendingFetch) -> Completion {
        let outcome = fetcher.fetch_users(&pending.criteria, pending.page).await;
        self.complete(pending, outcome)
    }

    pub fn results(&self) -> &[UserSummary] {
        &self.results
    }

    /// Last page successfully loaded.
    pub fn page(&self) -> Page {
        self.page
    }

    pub fn criteria(&self) -> Option<&SearchCriteria> {
        self.criteria.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn error(&self) -> Option<SessionError> {
        self.error
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        self.theme
    }
}
