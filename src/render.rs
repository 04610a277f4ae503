use console::Style;
use std::fmt::Write;

use crate::error::SessionError;
use crate::models::UserSummary;
use crate::session::SearchSession;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn heading(self) -> Style {
        match self {
            Theme::Light => Style::new().bold().black(),
            Theme::Dark => Style::new().bold().white(),
        }
    }

    fn detail(self) -> Style {
        match self {
            Theme::Light => Style::new().black().dim(),
            Theme::Dark => Style::new().white().dim(),
        }
    }

    fn link(self) -> Style {
        match self {
            Theme::Light => Style::new().blue().underlined(),
            Theme::Dark => Style::new().cyan().underlined(),
        }
    }

    fn error(self) -> Style {
        Style::new().red()
    }
}

/// Render one user card.
pub fn render_user(user: &UserSummary, theme: Theme) -> String {
    let location = user.location.as_deref().unwrap_or("Not specified");
    let repos = user
        .public_repos
        .map(|n| n.to_string())
        .unwrap_or_else(|| "N/A".to_string());

    let detail = theme.detail();
    format!(
        "{}\n  {}\n  {}\n  {}\n  {}",
        theme.heading().apply_to(&user.login),
        detail.apply_to(format!("Location: {}", location)),
        detail.apply_to(format!("Repos: {}", repos)),
        theme.link().apply_to(&user.html_url),
        detail.apply_to(format!("Avatar: {}", user.avatar_url)),
    )
}

/// Render a failed search action in the theme's error style.
pub fn render_error(error: SessionError, theme: Theme) -> String {
    theme.error().apply_to(error).to_string()
}

/// Render a status line such as "No more users.".
pub fn render_note(note: &str, theme: Theme) -> String {
    theme.detail().apply_to(note).to_string()
}

/// Render the current state of a session.
pub fn render_session(session: &SearchSession) -> String {
    let theme = session.theme();
    let results = session.results();

    if results.is_empty() {
        if session.is_busy() {
            return "Loading...".to_string();
        }
        if let Some(error) = session.error() {
            return render_error(error, theme);
        }
        return String::new();
    }

    let mut out = String::new();
    for user in results {
        let _ = writeln!(out, "{}", render_user(user, theme));
    }
    if let Some(error) = session.error() {
        let _ = writeln!(out, "{}", render_error(error, theme));
    } else if session.is_exhausted() {
        let _ = writeln!(out, "{}", render_note("No more users.", theme));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryError;
    use crate::query::SearchCriteria;
    use reqwest::StatusCode;

    fn octocat() -> UserSummary {
        UserSummary {
            id: 1,
            login: "octocat".to_string(),
            avatar_url: "https://avatars.githubusercontent.com/u/1".to_string(),
            html_url: "https://github.com/octocat".to_string(),
            location: None,
            public_repos: Some(8),
        }
    }

    #[test]
    fn user_card_fills_missing_fields() {
        let card = render_user(&octocat(), Theme::Dark);
        assert!(card.contains("octocat"));
        assert!(card.contains("Location: Not specified"));
        assert!(card.contains("Repos: 8"));
        assert!(card.contains("https://github.com/octocat"));

        let mut unknown = octocat();
        unknown.public_repos = None;
        unknown.location = Some("Lisbon".to_string());
        let card = render_user(&unknown, Theme::Light);
        assert!(card.contains("Repos: N/A"));
        assert!(card.contains("Location: Lisbon"));
    }

    #[test]
    fn load_more_error_matches_session_rendering() {
        let mut session = SearchSession::with_theme(Theme::Dark);
        let pending = session.submit(SearchCriteria::new().username("octocat")).unwrap();
        session.complete(pending, Ok(vec![octocat()]));
        let more = session.load_more().unwrap();
        session.complete(
            more,
            Err(QueryError::Status {
                status: StatusCode::BAD_GATEWAY,
                body: String::new(),
            }),
        );

        let line = render_error(SessionError::NoMoreResults, Theme::Dark);
        assert!(line.contains("No more users to load"));
        assert!(render_session(&session).contains(&line));
    }

    #[test]
    fn session_states() {
        let mut session = SearchSession::new();
        assert_eq!(render_session(&session), "");

        let pending = session.submit(SearchCriteria::new().username("octocat")).unwrap();
        assert_eq!(render_session(&session), "Loading...");

        session.complete(
            pending,
            Err(QueryError::Status {
                status: StatusCode::SERVICE_UNAVAILABLE,
                body: String::new(),
            }),
        );
        assert!(render_session(&session).contains(&SessionError::NoResults.to_string()));

        let pending = session.submit(SearchCriteria::new().username("octocat")).unwrap();
        session.complete(pending, Ok(vec![octocat()]));
        let more = session.load_more().unwrap();
        session.complete(more, Ok(vec![]));
        let out = render_session(&session);
        assert!(out.contains("octocat"));
        assert!(out.contains("No more users."));
    }
}
