// Load and render pipeline.
// Fetches profile and repositories together, derives stats, and renders onto a page.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use tracing::{debug, error, info};

use crate::cache::{Clock, Storage};
use crate::error::Result;
use crate::github::{GitHubSource, RawRepository};
use crate::page::{self, Page};
use crate::portfolio::{LanguageStats, Profile, active_repos, language_stats, normalize_profile};

/// Everything a render needs from one load.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub profile: Profile,
    /// Active repositories only.
    pub repos: Vec<RawRepository>,
    pub languages: LanguageStats,
    pub loaded_at: DateTime<Utc>,
}

/// Display choices that are not part of the layout.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub projects: usize,
    pub timeline_limit: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            projects: 6,
            timeline_limit: None,
        }
    }
}

/// Fetch both resources concurrently, failing fast, then normalize and derive.
pub async fn load<S: Storage, C: Clock>(source: &GitHubSource<S, C>) -> Result<Snapshot> {
    let (raw_profile, raw_repos) =
        tokio::try_join!(source.fetch_profile(), source.fetch_repos())?;

    let profile = normalize_profile(raw_profile);
    let repos = active_repos(&raw_repos);
    let languages = language_stats(&repos);
    debug!(
        total = raw_repos.len(),
        active = repos.len(),
        top_language = %languages.top,
        "derived portfolio"
    );

    Ok(Snapshot {
        profile,
        repos,
        languages,
        loaded_at: source.now(),
    })
}

/// Render a load outcome. A failure touches only the error targets.
pub fn apply(page: &mut Page, outcome: &Result<Snapshot>, options: RenderOptions) {
    match outcome {
        Ok(snapshot) => {
            page::render::clear_error(page);
            page::render_profile(page, &snapshot.profile);
            page::render_stats(page, &snapshot.profile, &snapshot.repos);
            page::render_languages(page, &snapshot.languages);
            page::render_projects(page, &snapshot.repos, options.projects, snapshot.loaded_at);
            page::render_timeline(
                page,
                &snapshot.profile,
                &snapshot.repos,
                &snapshot.languages,
                options.timeline_limit,
            );
            page::render_achievements(page, &snapshot.profile, &snapshot.repos, snapshot.loaded_at);
            page::wire_contact(page, &snapshot.profile);
        }
        Err(e) => {
            error!(error = %e, "failed to load GitHub data");
            page::render_error(page);
        }
    }
}

/// Load then render in one step.
pub async fn run<S: Storage, C: Clock>(
    source: &GitHubSource<S, C>,
    page: &mut Page,
    options: RenderOptions,
) {
    let outcome = load(source).await;
    apply(page, &outcome, options);
}

/// Guard against overlapping refreshes.
#[derive(Debug, Clone, Default)]
pub struct Refresher {
    in_flight: Arc<AtomicBool>,
}

/// Held for the duration of one refresh; releases the slot on drop.
#[derive(Debug)]
pub struct RefreshGuard {
    in_flight: Arc<AtomicBool>,
}

impl Refresher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the refresh slot, or `None` if a refresh is already running.
    pub fn try_begin(&self) -> Option<RefreshGuard> {
        match self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        {
            Ok(_) => {
                info!("refresh started");
                Some(RefreshGuard {
                    in_flight: Arc::clone(&self.in_flight),
                })
            }
            Err(_) => {
                debug!("refresh skipped, previous one still running");
                None
            }
        }
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

impl Drop for RefreshGuard {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{Cache, ManualClock, MemoryStorage};
    use crate::github::GitHubClient;
    use crate::page::{Anchor, FieldKey};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn source(server: &MockServer) -> GitHubSource<MemoryStorage, ManualClock> {
        let clock = ManualClock::new(DateTime::from_timestamp(1_718_000_000, 0).unwrap());
        let client = GitHubClient::with_base_url(&server.uri()).unwrap();
        GitHubSource::new(client, Cache::new(MemoryStorage::new(), clock), "octocat")
    }

    async fn mount_profile(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/users/octocat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "login": "octocat",
                "name": null,
                "bio": null,
                "email": "octo@example.com",
                "public_repos": 3,
                "followers": 20,
                "created_at": "2011-01-25T18:44:36Z",
                "html_url": "https://github.com/octocat"
            })))
            .mount(server)
            .await;
    }

    fn repo_json(name: &str, stars: u64, language: &str, fork: bool) -> serde_json::Value {
        serde_json::json!({
            "name": name,
            "language": language,
            "stargazers_count": stars,
            "html_url": format!("https://github.com/octocat/{}", name),
            "updated_at": "2024-06-01T00:00:00Z",
            "created_at": "2020-01-01T00:00:00Z",
            "fork": fork,
            "archived": false
        })
    }

    #[tokio::test]
    async fn test_run_renders_everything() {
        let server = MockServer::start().await;
        mount_profile(&server).await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                repo_json("forked", 50, "C", true),
                repo_json("tool", 4, "Rust", false),
                repo_json("site", 1, "HTML", false),
            ])))
            .mount(&server)
            .await;

        let source = source(&server);
        let mut page = Page::from_anchors(&Anchor::all());
        run(&source, &mut page, RenderOptions::default()).await;

        assert_eq!(page.field(FieldKey::Name).unwrap().text, "octocat");
        assert_eq!(
            page.field(FieldKey::Bio).unwrap().text,
            "No bio available yet."
        );
        let projects: Vec<&str> = page
            .projects()
            .unwrap()
            .iter()
            .map(|card| card.name.as_str())
            .collect();
        assert_eq!(projects, vec!["tool", "site"]);
        assert_eq!(page.timeline().unwrap().entries.len(), 5);
        assert_eq!(page.top_language().unwrap().text, "Rust");
        assert!(page.contact_form().unwrap().is_enabled());
        assert_eq!(page.stats().unwrap()[2].value, "5");
        assert_eq!(page.error(), None);
        assert_eq!(page.error_renders(), 0);
    }

    #[tokio::test]
    async fn test_repo_failure_renders_error_once_and_nothing_else() {
        let server = MockServer::start().await;
        mount_profile(&server).await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/repos"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let source = source(&server);
        let mut page = Page::from_anchors(&Anchor::all());
        run(&source, &mut page, RenderOptions::default()).await;

        assert!(page.fields().all(|(_, slot)| slot.is_blank()));
        assert_eq!(page.projects(), Some(&[][..]));
        assert!(page.timeline().unwrap().entries.is_empty());
        assert!(!page.contact_form().unwrap().is_enabled());
        assert_eq!(page.error(), Some("Unable to load GitHub data right now."));
        assert_eq!(page.error_renders(), 1);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_render() {
        let server = MockServer::start().await;
        mount_profile(&server).await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/repos"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let source = source(&server);
        let mut page = Page::from_anchors(&Anchor::all());
        run(&source, &mut page, RenderOptions::default()).await;
        assert_eq!(page.timeline().unwrap().entries.len(), 2);

        // Expire the cache so the next run goes back to the network
        source.cache().clock().advance(chrono::Duration::minutes(11));
        run(&source, &mut page, RenderOptions::default()).await;

        assert_eq!(page.field(FieldKey::Login).unwrap().text, "octocat");
        assert_eq!(page.timeline().unwrap().entries.len(), 2);
        assert_eq!(page.error_renders(), 1);
    }

    #[test]
    fn test_refresher_rejects_overlap() {
        let refresher = Refresher::new();
        let guard = refresher.try_begin();
        assert!(guard.is_some());
        assert!(refresher.is_running());
        assert!(refresher.try_begin().is_none());

        drop(guard);
        assert!(!refresher.is_running());
        assert!(refresher.clone().try_begin().is_some());
    }
}
