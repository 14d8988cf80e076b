// Cached GitHub data source.
// Consults the cache before each read and stores successful responses.

use tracing::info;

use crate::cache::{Cache, Clock, Storage};
use crate::error::Result;

use super::client::GitHubClient;
use super::types::{RateLimit, RawProfile, RawRepository};

const PROFILE_KEY: &str = "profile";
const REPOS_KEY: &str = "repos";

/// A single user's profile and repositories, read through the cache.
pub struct GitHubSource<S, C> {
    client: GitHubClient,
    cache: Cache<S, C>,
    username: String,
}

impl<S: Storage, C: Clock> GitHubSource<S, C> {
    pub fn new(client: GitHubClient, cache: Cache<S, C>, username: impl Into<String>) -> Self {
        Self {
            client,
            cache,
            username: username.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn cache(&self) -> &Cache<S, C> {
        &self.cache
    }

    pub fn rate_limit(&self) -> RateLimit {
        self.client.rate_limit()
    }

    pub fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.cache.clock().now()
    }

    /// Fetch the profile, from cache when fresh.
    pub async fn fetch_profile(&self) -> Result<RawProfile> {
        if let Some(profile) = self.cache.get::<RawProfile>(PROFILE_KEY) {
            return Ok(profile);
        }
        let profile = self.client.get_user(&self.username).await?;
        info!(user = %self.username, "fetched profile");
        self.cache.set(PROFILE_KEY, &profile);
        Ok(profile)
    }

    /// Fetch the first page of repositories, from cache when fresh.
    pub async fn fetch_repos(&self) -> Result<Vec<RawRepository>> {
        if let Some(repos) = self.cache.get::<Vec<RawRepository>>(REPOS_KEY) {
            return Ok(repos);
        }
        let repos = self.client.get_user_repos(&self.username).await?;
        info!(user = %self.username, count = repos.len(), "fetched repositories");
        self.cache.set(REPOS_KEY, &repos);
        Ok(repos)
    }
}
