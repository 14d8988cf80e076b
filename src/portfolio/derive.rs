// Derived portfolio data.
// Repository filtering, project ranking, language counts, and the timeline.

use std::cmp::Ordering;

use chrono::{DateTime, Duration, Utc};

use crate::github::RawRepository;

use super::format::{EMPTY_GLYPH, format_date};
use super::profile::Profile;

/// Repositories count as recent for this many days after their last update.
const RECENT_DAYS: i64 = 7;

/// Language counts, most used first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageStats {
    pub entries: Vec<(String, usize)>,
    /// Most used language, or the empty glyph when none is known.
    pub top: String,
}

impl LanguageStats {
    pub fn has_top(&self) -> bool {
        !self.entries.is_empty()
    }
}

/// One entry of the synthetic experience timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEvent {
    pub title: String,
    pub date_label: String,
    pub detail: String,
}

impl TimelineEvent {
    fn new(title: &str, date_label: String, detail: String) -> Self {
        Self {
            title: title.to_string(),
            date_label,
            detail,
        }
    }
}

/// Drop forks and archived repositories, keeping order.
pub fn active_repos(repos: &[RawRepository]) -> Vec<RawRepository> {
    repos
        .iter()
        .filter(|repo| !repo.fork && !repo.archived)
        .cloned()
        .collect()
}

/// Ranking score: stars dominate, update time breaks near-ties.
pub fn project_score(repo: &RawRepository) -> f64 {
    repo.stargazers_count as f64 * 10.0 + repo.updated_at.timestamp_millis() as f64 / 1e9
}

/// The `limit` best repositories by [`project_score`], equal scores in input order.
pub fn top_repos(repos: &[RawRepository], limit: usize) -> Vec<RawRepository> {
    let mut ranked = repos.to_vec();
    // sort_by is stable
    ranked.sort_by(|a, b| {
        project_score(b)
            .partial_cmp(&project_score(a))
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(limit);
    ranked
}

/// Count repositories per language, most used first.
pub fn language_stats(repos: &[RawRepository]) -> LanguageStats {
    let mut entries: Vec<(String, usize)> = Vec::new();
    for language in repos
        .iter()
        .filter_map(|repo| repo.language.as_deref())
        .filter(|language| !language.is_empty())
    {
        match entries.iter_mut().find(|(name, _)| name == language) {
            Some((_, count)) => *count += 1,
            None => entries.push((language.to_string(), 1)),
        }
    }
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    let top = entries
        .first()
        .map(|(name, _)| name.clone())
        .unwrap_or_else(|| EMPTY_GLYPH.to_string());
    LanguageStats { entries, top }
}

/// Sum of stars across repositories.
pub fn total_stars(repos: &[RawRepository]) -> u64 {
    repos.iter().map(|repo| repo.stargazers_count).sum()
}

/// Whether a repository was updated within the last week.
pub fn is_recently_updated(updated_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(updated_at) <= Duration::days(RECENT_DAYS)
}

/// First repository maximizing `key`; later equal values lose.
fn first_max_by<K: Ord>(
    repos: &[RawRepository],
    key: impl Fn(&RawRepository) -> K,
) -> Option<&RawRepository> {
    repos.iter().fold(None, |best, repo| match best {
        Some(current) if key(repo) <= key(current) => Some(current),
        _ => Some(repo),
    })
}

/// Build the experience timeline, truncated to `limit` when given.
pub fn timeline(
    profile: &Profile,
    repos: &[RawRepository],
    languages: &LanguageStats,
    limit: Option<usize>,
) -> Vec<TimelineEvent> {
    let mut events = vec![TimelineEvent::new(
        "Joined GitHub",
        format_date(profile.created_at),
        format!("Started as @{}", profile.login),
    )];

    // min_by_key keeps the first of equal minimums
    let first = repos.iter().min_by_key(|repo| repo.created_at);
    let most_starred = first_max_by(repos, |repo| repo.stargazers_count);
    let latest = first_max_by(repos, |repo| repo.updated_at);

    if let (Some(first), Some(most_starred), Some(latest)) = (first, most_starred, latest) {
        events.push(TimelineEvent::new(
            "First public repository",
            format_date(Some(first.created_at)),
            first.name.clone(),
        ));
        events.push(TimelineEvent::new(
            "Most starred project",
            format_date(Some(most_starred.updated_at)),
            format!(
                "{} • {} stars",
                most_starred.name, most_starred.stargazers_count
            ),
        ));
        events.push(TimelineEvent::new(
            "Latest update",
            format_date(Some(latest.updated_at)),
            latest.name.clone(),
        ));
    }

    let focus = if languages.has_top() {
        languages.top.clone()
    } else {
        "No languages detected yet".to_string()
    };
    events.push(TimelineEvent::new("Top language focus", String::new(), focus));

    if let Some(limit) = limit {
        events.truncate(limit);
    }
    events
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::github::RawProfile;
    use crate::portfolio::normalize_profile;

    pub(crate) fn repo(name: &str, stars: u64, updated: &str) -> RawRepository {
        RawRepository {
            name: name.to_string(),
            description: None,
            language: None,
            stargazers_count: stars,
            html_url: format!("https://github.com/octocat/{}", name),
            homepage: None,
            updated_at: date(updated),
            created_at: date(updated),
            fork: false,
            archived: false,
        }
    }

    pub(crate) fn date(day: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(&format!("{}T00:00:00Z", day))
            .unwrap()
            .with_timezone(&Utc)
    }

    fn with_language(name: &str, language: Option<&str>) -> RawRepository {
        RawRepository {
            language: language.map(str::to_string),
            ..repo(name, 0, "2024-01-01")
        }
    }

    fn names(repos: &[RawRepository]) -> Vec<&str> {
        repos.iter().map(|repo| repo.name.as_str()).collect()
    }

    fn profile() -> Profile {
        normalize_profile(RawProfile {
            login: "octocat".to_string(),
            created_at: Some(date("2011-01-25")),
            ..Default::default()
        })
    }

    #[test]
    fn test_active_repos_excludes_forks_and_archived() {
        let repos = vec![
            repo("a", 0, "2024-01-01"),
            RawRepository {
                fork: true,
                ..repo("b", 0, "2024-01-01")
            },
            repo("c", 0, "2024-01-01"),
            RawRepository {
                archived: true,
                ..repo("d", 0, "2024-01-01")
            },
            RawRepository {
                fork: true,
                archived: true,
                ..repo("e", 0, "2024-01-01")
            },
            repo("f", 0, "2024-01-01"),
        ];
        assert_eq!(names(&active_repos(&repos)), vec!["a", "c", "f"]);
    }

    #[test]
    fn test_top_repos_weights_stars_then_recency() {
        let repos = vec![
            repo("A", 10, "2024-01-01"),
            repo("B", 1, "2024-06-01"),
            repo("C", 10, "2024-06-01"),
        ];
        assert_eq!(names(&top_repos(&repos, 2)), vec!["C", "A"]);
    }

    #[test]
    fn test_top_repos_is_stable_on_equal_scores() {
        let repos = vec![
            repo("first", 3, "2024-03-03"),
            repo("second", 3, "2024-03-03"),
            repo("third", 3, "2024-03-03"),
            repo("best", 4, "2024-03-03"),
        ];
        assert_eq!(
            names(&top_repos(&repos, 10)),
            vec!["best", "first", "second", "third"]
        );
    }

    #[test]
    fn test_top_repos_limit_larger_than_input() {
        let repos = vec![repo("only", 0, "2024-01-01")];
        assert_eq!(top_repos(&repos, 6).len(), 1);
        assert!(top_repos(&[], 6).is_empty());
    }

    #[test]
    fn test_language_stats() {
        let repos = vec![
            with_language("a", Some("JS")),
            with_language("b", Some("JS")),
            with_language("c", Some("Python")),
            with_language("d", None),
        ];
        let stats = language_stats(&repos);
        assert_eq!(
            stats.entries,
            vec![("JS".to_string(), 2), ("Python".to_string(), 1)]
        );
        assert_eq!(stats.top, "JS");
    }

    #[test]
    fn test_language_stats_without_languages() {
        let repos = vec![with_language("a", None), with_language("b", None)];
        let stats = language_stats(&repos);
        assert!(stats.entries.is_empty());
        assert_eq!(stats.top, "—");
        assert!(!stats.has_top());
    }

    #[test]
    fn test_language_ties_keep_first_seen_order() {
        let repos = vec![
            with_language("a", Some("Rust")),
            with_language("b", Some("Go")),
        ];
        assert_eq!(language_stats(&repos).top, "Rust");
    }

    #[test]
    fn test_timeline_without_repos() {
        let events = timeline(&profile(), &[], &language_stats(&[]), None);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].title, "Joined GitHub");
        assert_eq!(events[0].date_label, "Jan 25, 2011");
        assert_eq!(events[0].detail, "Started as @octocat");
        assert_eq!(events[1].title, "Top language focus");
        assert_eq!(events[1].detail, "No languages detected yet");
    }

    #[test]
    fn test_timeline_with_repos() {
        let repos = vec![
            RawRepository {
                created_at: date("2015-05-05"),
                language: Some("Rust".to_string()),
                ..repo("tool", 5, "2023-02-02")
            },
            RawRepository {
                created_at: date("2012-01-01"),
                ..repo("dotfiles", 5, "2024-07-07")
            },
        ];
        let languages = language_stats(&repos);
        let events = timeline(&profile(), &repos, &languages, None);

        let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Joined GitHub",
                "First public repository",
                "Most starred project",
                "Latest update",
                "Top language focus",
            ]
        );
        assert_eq!(events[1].detail, "dotfiles");
        assert_eq!(events[1].date_label, "Jan 1, 2012");
        // Equal stars: the first repository wins
        assert_eq!(events[2].detail, "tool • 5 stars");
        assert_eq!(events[2].date_label, "Feb 2, 2023");
        assert_eq!(events[3].detail, "dotfiles");
        assert_eq!(events[4].detail, "Rust");
        assert_eq!(events[4].date_label, "");
    }

    #[test]
    fn test_timeline_limit() {
        let repos = vec![repo("tool", 1, "2023-02-02")];
        let languages = language_stats(&repos);
        assert_eq!(timeline(&profile(), &repos, &languages, Some(3)).len(), 3);
        assert_eq!(timeline(&profile(), &repos, &languages, Some(0)).len(), 0);
        assert_eq!(timeline(&profile(), &repos, &languages, Some(9)).len(), 5);
    }

    #[test]
    fn test_recently_updated() {
        let now = date("2024-06-10");
        assert!(is_recently_updated(date("2024-06-03"), now));
        assert!(!is_recently_updated(date("2024-06-02"), now));
        assert_eq!(
            total_stars(&[repo("a", 2, "2024-01-01"), repo("b", 3, "2024-01-01")]),
            5
        );
    }
}
