use serde::{Deserialize, Serialize};

/// A user as returned by the search endpoint. Never modified after receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: u64,
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub public_repos: Option<u32>,
}

/// Body of `GET /search/users`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub incomplete_results: bool,
    pub items: Vec<UserSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_search_items_without_optional_fields() {
        let body = json!({
            "total_count": 2,
            "incomplete_results": false,
            "items": [
                {
                    "id": 1,
                    "login": "octocat",
                    "avatar_url": "https://avatars.githubusercontent.com/u/1",
                    "html_url": "https://github.com/octocat",
                    "type": "User",
                    "score": 1.0
                },
                {
                    "id": 2,
                    "login": "hubot",
                    "avatar_url": "https://avatars.githubusercontent.com/u/2",
                    "html_url": "https://github.com/hubot",
                    "location": null,
                    "public_repos": 12
                }
            ]
        });

        let response: SearchResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.total_count, Some(2));
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].login, "octocat");
        assert_eq!(response.items[0].location, None);
        assert_eq!(response.items[0].public_repos, None);
        assert_eq!(response.items[1].public_repos, Some(12));
    }

    #[test]
    fn missing_items_is_rejected() {
        let body = json!({ "message": "API rate limit exceeded" });
        assert!(serde_json::from_value::<SearchResponse>(body).is_err());

        let empty: SearchResponse = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert!(empty.items.is_empty());
    }
}
