// GitHub API endpoint functions.
// Typed reads for the public user profile and repository list.

use crate::error::Result;

use super::client::GitHubClient;
use super::types::{RawProfile, RawRepository};

/// Only the first page is ever read.
pub const REPOS_PER_PAGE: u32 = 100;

impl GitHubClient {
    /// Get a user's public profile.
    pub async fn get_user(&self, username: &str) -> Result<RawProfile> {
        let response = self.get(&format!("/users/{}", username)).await?;
        let profile: RawProfile = response.json().await?;
        Ok(profile)
    }

    /// Get a user's public repositories, most recently updated first.
    pub async fn get_user_repos(&self, username: &str) -> Result<Vec<RawRepository>> {
        let params = [
            ("per_page", REPOS_PER_PAGE.to_string()),
            ("sort", "updated".to_string()),
        ];
        let response = self
            .get_with_params(&format!("/users/{}/repos", username), &params)
            .await?;
        let repos: Vec<RawRepository> = response.json().await?;
        Ok(repos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_user_repos_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/repos"))
            .and(query_param("per_page", "100"))
            .and(query_param("sort", "updated"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "name": "hello-world",
                    "html_url": "https://github.com/octocat/hello-world",
                    "stargazers_count": 2,
                    "updated_at": "2024-06-01T00:00:00Z",
                    "created_at": "2020-01-01T00:00:00Z"
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = GitHubClient::with_base_url(&server.uri()).unwrap();
        let repos = client.get_user_repos("octocat").await.unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].stargazers_count, 2);
        assert!(!repos[0].fork);
    }

    #[tokio::test]
    async fn test_get_user() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "login": "octocat",
                "name": "The Octocat",
                "followers": 1000
            })))
            .mount(&server)
            .await;

        let client = GitHubClient::with_base_url(&server.uri()).unwrap();
        let profile = client.get_user("octocat").await.unwrap();
        assert_eq!(profile.name.as_deref(), Some("The Octocat"));
        assert_eq!(profile.followers, Some(1000));
    }
}
