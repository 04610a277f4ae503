use clap::Parser;

use crate::query::SearchCriteria;

/// GitHub user search CLI: find users by name, location and repository count,
/// ten results per page.
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about,
    long_about = "Search GitHub users by username, location and minimum number of public repositories, loading results ten at a time."
)]
pub struct Args {
    /// Username (or part of one) to search for.
    #[clap(short, long)]
    pub username: Option<String>,

    /// Only users whose profile location matches, e.g. "San Francisco".
    #[clap(short, long)]
    pub location: Option<String>,

    /// Only users with more than this many public repositories.
    #[clap(short, long, value_name = "NUM")]
    pub min_repos: Option<u32>,

    /// Number of pages to load before exiting.
    #[clap(
        short,
        long,
        value_name = "NUM",
        default_value = "1",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub pages: u32,

    /// Prompt after each page: Enter loads more, `t` toggles the theme, `q` quits.
    #[clap(short, long)]
    pub interactive: bool,

    /// Start with the dark theme.
    #[clap(long)]
    pub dark: bool,

    /// API base URL. Overrides the GITHUB_API_URL environment variable.
    #[clap(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Save the accumulated results to this file as JSON.
    #[clap(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Request timeout in seconds.
    #[clap(long, value_name = "SECS", default_value = "30")]
    pub timeout: u64,
}

impl Args {
    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            username: self.username.clone(),
            location: self.location.clone(),
            min_repos: self.min_repos,
        }
    }
}
