use std::fmt;

/// Query used when no criteria narrow the search.
pub const DEFAULT_QUERY: &str = "type:user";

/// Number of users requested per page.
pub const PER_PAGE: u32 = 10;

/// Filters entered by the user for one search.
///
/// Every field is optional. Blank text fields are treated the same as absent ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub username: Option<String>,
    pub location: Option<String>,
    pub min_repos: Option<u32>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn min_repos(mut self, min_repos: u32) -> Self {
        self.min_repos = Some(min_repos);
        self
    }

    /// True when no field would contribute to the query.
    pub fn is_empty(&self) -> bool {
        non_blank(&self.username).is_none()
            && non_blank(&self.location).is_none()
            && self.min_repos.is_none()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Build the `q` parameter for the user search endpoint.
///
/// Fragments always appear in the same order: the bare username term, then
/// `location:<value>`, then `repos:><value>`. Falls back to [`DEFAULT_QUERY`]
/// so the upstream API never receives an empty query.
pub fn build_query(criteria: &SearchCriteria) -> String {
    let mut terms: Vec<String> = Vec::with_capacity(3);

    if let Some(username) = non_blank(&criteria.username) {
        terms.push(username.to_string());
    }
    if let Some(location) = non_blank(&criteria.location) {
        terms.push(format!("location:{}", location));
    }
    if let Some(min_repos) = criteria.min_repos {
        terms.push(format!("repos:>{}", min_repos));
    }

    let query = terms.join(" ");
    if query.trim().is_empty() {
        DEFAULT_QUERY.to_string()
    } else {
        query
    }
}

/// 1-indexed page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Page(u32);

impl Page {
    pub const FIRST: Page = Page(1);

    /// Returns `None` for page 0.
    pub fn new(page: u32) -> Option<Self> {
        if page == 0 {
            None
        } else {
            Some(Page(page))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn next(self) -> Self {
        Page(self.0.saturating_add(1))
    }

    pub fn is_first(self) -> bool {
        self.0 == 1
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::FIRST
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
