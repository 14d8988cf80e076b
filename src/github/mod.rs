// GitHub API client module.
// Provides the HTTP client, endpoint methods, response types, and the cached source.

pub mod client;
pub mod endpoints;
pub mod source;
pub mod types;

pub use client::{GITHUB_API_BASE, GitHubClient};
pub use source::GitHubSource;
pub use types::*;
