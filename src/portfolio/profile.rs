// Profile normalization.
// Maps the raw GitHub profile onto a shape with every fallback applied.

use chrono::{DateTime, Utc};

use crate::github::RawProfile;

pub const NO_BIO: &str = "No bio available yet.";
pub const NO_LOCATION: &str = "Location not shared";
pub const NO_COMPANY: &str = "Independent";

/// Profile with defaults substituted for missing fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub login: String,
    pub avatar_url: String,
    pub bio: String,
    pub location: String,
    pub company: String,
    /// Empty when the user has no website.
    pub website_url: String,
    /// Empty when the email is not public.
    pub email: String,
    /// Empty when no Twitter handle is linked.
    pub twitter_handle: String,
    pub follower_count: u64,
    pub public_repo_count: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub profile_url: String,
}

/// Treat absent, null, and empty strings alike.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub fn normalize_profile(raw: RawProfile) -> Profile {
    Profile {
        name: present(raw.name).unwrap_or_else(|| raw.login.clone()),
        avatar_url: raw.avatar_url.unwrap_or_default(),
        bio: present(raw.bio).unwrap_or_else(|| NO_BIO.to_string()),
        location: present(raw.location).unwrap_or_else(|| NO_LOCATION.to_string()),
        company: present(raw.company).unwrap_or_else(|| NO_COMPANY.to_string()),
        website_url: raw.blog.unwrap_or_default(),
        email: raw.email.unwrap_or_default(),
        twitter_handle: raw.twitter_username.unwrap_or_default(),
        follower_count: raw.followers.unwrap_or(0),
        public_repo_count: raw.public_repos.unwrap_or(0),
        created_at: raw.created_at,
        profile_url: raw.html_url.unwrap_or_default(),
        login: raw.login,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_get_defaults() {
        let raw = RawProfile {
            login: "octocat".to_string(),
            ..Default::default()
        };
        let profile = normalize_profile(raw);

        assert_eq!(profile.name, "octocat");
        assert_eq!(profile.bio, "No bio available yet.");
        assert_eq!(profile.location, "Location not shared");
        assert_eq!(profile.company, "Independent");
        assert_eq!(profile.website_url, "");
        assert_eq!(profile.email, "");
        assert_eq!(profile.twitter_handle, "");
        assert_eq!(profile.follower_count, 0);
        assert_eq!(profile.public_repo_count, 0);
        assert_eq!(profile.created_at, None);
    }

    #[test]
    fn test_empty_strings_count_as_missing() {
        let raw = RawProfile {
            login: "octocat".to_string(),
            name: Some(String::new()),
            bio: Some(String::new()),
            ..Default::default()
        };
        let profile = normalize_profile(raw);
        assert_eq!(profile.name, "octocat");
        assert_eq!(profile.bio, NO_BIO);
    }

    #[test]
    fn test_present_fields_pass_through() {
        let raw = RawProfile {
            login: "octocat".to_string(),
            name: Some("The Octocat".to_string()),
            company: Some("@github".to_string()),
            blog: Some("github.blog".to_string()),
            followers: Some(42),
            html_url: Some("https://github.com/octocat".to_string()),
            ..Default::default()
        };
        let profile = normalize_profile(raw);
        assert_eq!(profile.name, "The Octocat");
        assert_eq!(profile.company, "@github");
        assert_eq!(profile.website_url, "github.blog");
        assert_eq!(profile.follower_count, 42);
        assert_eq!(profile.profile_url, "https://github.com/octocat");
    }
}
