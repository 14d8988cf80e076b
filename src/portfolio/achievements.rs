// Activity achievements and language badges.
// Badges earned from profile age, stars, language spread, and recent updates.

use std::collections::HashSet;

use chrono::{DateTime, Datelike, Duration, Utc};

use crate::github::RawRepository;

use super::derive::total_stars;
use super::profile::Profile;

const ACTIVE_WINDOW_DAYS: i64 = 30;

/// A badge shown in the achievements strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    pub icon: &'static str,
    pub title: String,
    pub desc: String,
}

/// Icon and grouping for a project's primary language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageBadge {
    pub icon: &'static str,
    pub category: &'static str,
}

pub fn language_badge(language: Option<&str>) -> LanguageBadge {
    let (icon, category) = match language {
        Some("JavaScript") => ("🟨", "web"),
        Some("TypeScript") => ("🔷", "web"),
        Some("HTML") => ("📄", "web"),
        Some("CSS") => ("🎨", "web"),
        Some("EJS") => ("📝", "web"),
        Some("Python") => ("🐍", "backend"),
        Some("Java") => ("☕", "backend"),
        Some("C++") => ("⚙️", "systems"),
        Some("React") => ("⚛️", "frontend"),
        _ => ("📦", "other"),
    };
    LanguageBadge { icon, category }
}

fn plural(count: u64) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// Badges earned as of `now`, in display order.
pub fn achievements(
    profile: &Profile,
    repos: &[RawRepository],
    now: DateTime<Utc>,
) -> Vec<Achievement> {
    let mut earned = Vec::new();

    if profile.public_repo_count >= 10 {
        earned.push(Achievement {
            icon: "📦",
            title: "Repository Creator".to_string(),
            desc: format!("{} public repositories", profile.public_repo_count),
        });
    }

    let stars = total_stars(repos);
    if stars > 0 {
        earned.push(Achievement {
            icon: "⭐",
            title: "Star Collector".to_string(),
            desc: format!("{} total stars", stars),
        });
    }

    if let Some(created_at) = profile.created_at {
        let years = (now.signed_duration_since(created_at).num_days() / 365).max(0) as u64;
        if years >= 1 {
            earned.push(Achievement {
                icon: "🎂",
                title: format!("{} Year{} on GitHub", years, plural(years)),
                desc: format!("Member since {}", created_at.year()),
            });
        }
    }

    let languages: HashSet<&str> = repos
        .iter()
        .filter_map(|repo| repo.language.as_deref())
        .filter(|language| !language.is_empty())
        .collect();
    if languages.len() >= 5 {
        earned.push(Achievement {
            icon: "🌐",
            title: "Polyglot Developer".to_string(),
            desc: format!("{} programming languages", languages.len()),
        });
    }

    let active = repos
        .iter()
        .filter(|repo| {
            now.signed_duration_since(repo.updated_at) <= Duration::days(ACTIVE_WINDOW_DAYS)
        })
        .count() as u64;
    if active > 0 {
        earned.push(Achievement {
            icon: "🚀",
            title: "Active Developer".to_string(),
            desc: format!("{} project{} updated recently", active, plural(active)),
        });
    }

    earned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::RawProfile;
    use crate::portfolio::derive::tests::{date, repo};
    use crate::portfolio::normalize_profile;

    fn profile(public_repos: u64, created: &str) -> Profile {
        normalize_profile(RawProfile {
            login: "octocat".to_string(),
            public_repos: Some(public_repos),
            created_at: Some(date(created)),
            ..Default::default()
        })
    }

    #[test]
    fn test_new_account_without_activity_earns_nothing() {
        let now = date("2024-06-10");
        assert!(achievements(&profile(0, "2024-06-01"), &[], now).is_empty());
    }

    #[test]
    fn test_all_achievements() {
        let now = date("2024-06-10");
        let repos: Vec<RawRepository> = ["Rust", "Go", "Python", "C", "Zig"]
            .iter()
            .enumerate()
            .map(|(i, language)| RawRepository {
                language: Some(language.to_string()),
                ..repo(&format!("r{}", i), 1, if i == 0 { "2024-06-01" } else { "2020-01-01" })
            })
            .collect();

        let earned = achievements(&profile(12, "2021-01-01"), &repos, now);
        let titles: Vec<&str> = earned.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Repository Creator",
                "Star Collector",
                "3 Years on GitHub",
                "Polyglot Developer",
                "Active Developer",
            ]
        );
        assert_eq!(earned[1].desc, "5 total stars");
        assert_eq!(earned[2].desc, "Member since 2021");
        assert_eq!(earned[4].desc, "1 project updated recently");
    }

    #[test]
    fn test_single_year_is_singular() {
        let now = date("2024-06-10");
        let earned = achievements(&profile(0, "2023-01-01"), &[], now);
        assert_eq!(earned[0].title, "1 Year on GitHub");
    }

    #[test]
    fn test_language_badge() {
        assert_eq!(language_badge(Some("Python")).category, "backend");
        let react = language_badge(Some("React"));
        assert_eq!((react.icon, react.category), ("⚛️", "frontend"));
        assert_eq!(language_badge(Some("Rust")).category, "other");
        assert_eq!(language_badge(Some("Brainfuck")).icon, "📦");
        assert_eq!(language_badge(None).category, "other");
    }
}
