// GitHub API response types.
// Raw user and repository records as the REST API returns them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public user profile from `GET /users/{username}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProfile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub twitter_username: Option<String>,
    #[serde(default)]
    pub followers: Option<u64>,
    #[serde(default)]
    pub public_repos: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Repository from `GET /users/{username}/repos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRepository {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub archived: bool,
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}

impl RateLimit {
    /// Whether any rate limit headers have been seen yet.
    pub fn is_known(&self) -> bool {
        self.limit > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_sparse_profile() {
        let json = r#"{
            "login": "octocat",
            "name": null,
            "bio": null,
            "followers": 12,
            "created_at": "2011-01-25T18:44:36Z",
            "html_url": "https://github.com/octocat"
        }"#;
        let profile: RawProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.login, "octocat");
        assert_eq!(profile.name, None);
        assert_eq!(profile.followers, Some(12));
        assert_eq!(profile.public_repos, None);
        assert_eq!(profile.created_at.unwrap().timestamp(), 1_295_981_076);
    }

    #[test]
    fn test_deserialize_repository() {
        let json = r#"{
            "name": "hello-world",
            "description": null,
            "language": "Rust",
            "stargazers_count": 3,
            "html_url": "https://github.com/octocat/hello-world",
            "homepage": "",
            "updated_at": "2024-06-01T00:00:00Z",
            "created_at": "2020-01-01T00:00:00Z",
            "fork": false,
            "archived": true,
            "watchers": 3
        }"#;
        let repo: RawRepository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.name, "hello-world");
        assert_eq!(repo.language.as_deref(), Some("Rust"));
        assert!(repo.archived);
        assert!(!repo.fork);
        assert_eq!(repo.homepage.as_deref(), Some(""));
    }
}
