// Renderers.
// Project the normalized profile and derived stats onto the page's declared targets.

use chrono::Datelike;

use crate::error::LOAD_FAILED_MESSAGE;
use crate::github::RawRepository;
use crate::portfolio::format::{
    EMPTY_GLYPH, ensure_url, format_count, format_date, format_repo_name, format_website,
};
use crate::portfolio::{
    LanguageStats, Profile, achievements, is_recently_updated, language_badge, timeline,
    top_repos, total_stars,
};

use super::contact::EMAIL_NOT_PUBLIC_NOTE;
use super::{FieldKey, LinkKey, LinkSlot, Page, ProjectCard, StatCard, TextSlot};

/// Language cards shown at most.
pub const MAX_LANGUAGE_CARDS: usize = 6;

const NO_DESCRIPTION: &str = "No description available";

fn set_text(slot: &mut TextSlot, value: &str) {
    if value.is_empty() {
        slot.text = EMPTY_GLYPH.to_string();
        slot.empty = true;
    } else {
        slot.text = value.to_string();
        slot.empty = false;
    }
}

fn set_link(slot: &mut LinkSlot, value: &str) {
    if value.is_empty() {
        slot.href = None;
        slot.empty = true;
    } else {
        slot.href = Some(value.to_string());
        slot.empty = false;
    }
}

fn field_value(profile: &Profile, key: FieldKey) -> String {
    match key {
        FieldKey::Name => profile.name.clone(),
        FieldKey::Login => profile.login.clone(),
        FieldKey::Bio => profile.bio.clone(),
        FieldKey::Location => profile.location.clone(),
        FieldKey::Company => profile.company.clone(),
        FieldKey::Followers => format_count(profile.follower_count),
        FieldKey::Repos => format_count(profile.public_repo_count),
        FieldKey::Joined => format_date(profile.created_at),
        FieldKey::Website if profile.website_url.is_empty() => "No website".to_string(),
        FieldKey::Website => format_website(&profile.website_url),
        FieldKey::Email if profile.email.is_empty() => "Email not public".to_string(),
        FieldKey::Email => profile.email.clone(),
        FieldKey::Twitter if profile.twitter_handle.is_empty() => "Not shared".to_string(),
        FieldKey::Twitter => format!("@{}", profile.twitter_handle),
        FieldKey::Avatar => profile.avatar_url.clone(),
    }
}

fn link_value(profile: &Profile, key: LinkKey) -> String {
    match key {
        LinkKey::Github => profile.profile_url.clone(),
        LinkKey::Twitter if profile.twitter_handle.is_empty() => String::new(),
        LinkKey::Twitter => format!("https://twitter.com/{}", profile.twitter_handle),
        LinkKey::Blog => ensure_url(&profile.website_url),
        LinkKey::Email if profile.email.is_empty() => String::new(),
        LinkKey::Email => format!("mailto:{}", profile.email),
    }
}

/// Write profile fields and links.
pub fn render_profile(page: &mut Page, profile: &Profile) {
    for key in FieldKey::ALL {
        let value = field_value(profile, key);
        for slot in page.fields_mut(key) {
            set_text(slot, &value);
        }
    }

    for key in LinkKey::ALL {
        let value = link_value(profile, key);
        for slot in page.links_mut(key) {
            set_link(slot, &value);
        }
    }
}

/// Followers, public repositories, and total stars.
pub fn render_stats(page: &mut Page, profile: &Profile, repos: &[RawRepository]) {
    if page.stats.is_empty() {
        return;
    }
    let cards = vec![
        StatCard {
            label: "Followers".to_string(),
            value: format_count(profile.follower_count),
            sub: format!("@{}", profile.login),
        },
        StatCard {
            label: "Repositories".to_string(),
            value: format_count(profile.public_repo_count),
            sub: "public".to_string(),
        },
        StatCard {
            label: "Stars".to_string(),
            value: format_count(total_stars(repos)),
            sub: format!("across {} active repos", repos.len()),
        },
    ];
    for container in &mut page.stats {
        *container = cards.clone();
    }
}

/// Top language placeholder and language cards.
pub fn render_languages(page: &mut Page, languages: &LanguageStats) {
    for slot in &mut page.top_language {
        set_text(slot, &languages.top);
    }

    if page.languages.is_empty() {
        return;
    }
    let cards: Vec<StatCard> = languages
        .entries
        .iter()
        .take(MAX_LANGUAGE_CARDS)
        .map(|(name, count)| StatCard {
            label: "Language".to_string(),
            value: name.clone(),
            sub: format!("{} repos", count),
        })
        .collect();
    for container in &mut page.languages {
        *container = cards.clone();
    }
}

fn project_card(repo: &RawRepository, now: chrono::DateTime<chrono::Utc>) -> ProjectCard {
    let badge = language_badge(repo.language.as_deref());
    ProjectCard {
        name: repo.name.clone(),
        title: format_repo_name(&repo.name),
        description: repo
            .description
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        language: repo
            .language
            .clone()
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| "Code".to_string()),
        icon: badge.icon,
        category: badge.category,
        stars: repo.stargazers_count,
        recent: is_recently_updated(repo.updated_at, now),
        year: repo.updated_at.year().to_string(),
        homepage: repo
            .homepage
            .as_deref()
            .filter(|h| !h.is_empty())
            .map(ensure_url),
        source_url: repo.html_url.clone(),
    }
}

/// Rebuild the project grid from the top `limit` repositories.
pub fn render_projects(
    page: &mut Page,
    repos: &[RawRepository],
    limit: usize,
    now: chrono::DateTime<chrono::Utc>,
) {
    if page.projects.is_empty() {
        return;
    }
    let cards: Vec<ProjectCard> = top_repos(repos, limit)
        .iter()
        .map(|repo| project_card(repo, now))
        .collect();
    for container in &mut page.projects {
        *container = cards.clone();
    }
}

/// Rebuild every timeline. `default_limit` applies where the anchor sets none.
pub fn render_timeline(
    page: &mut Page,
    profile: &Profile,
    repos: &[RawRepository],
    languages: &LanguageStats,
    default_limit: Option<usize>,
) {
    for container in &mut page.timelines {
        let limit = container.limit.or(default_limit);
        container.entries = timeline(profile, repos, languages, limit);
    }
}

/// Rebuild the achievement badges.
pub fn render_achievements(
    page: &mut Page,
    profile: &Profile,
    repos: &[RawRepository],
    now: chrono::DateTime<chrono::Utc>,
) {
    if page.achievements.is_empty() {
        return;
    }
    let earned = achievements(profile, repos, now);
    for container in &mut page.achievements {
        *container = earned.clone();
    }
}

/// Enable the contact form when the email is public, otherwise explain why not.
pub fn wire_contact(page: &mut Page, profile: &Profile) {
    if page.contact_forms.is_empty() {
        return;
    }
    if profile.email.is_empty() {
        for form in &mut page.contact_forms {
            form.disable();
        }
        for note in &mut page.contact_notes {
            set_text(note, EMAIL_NOT_PUBLIC_NOTE);
        }
    } else {
        for form in &mut page.contact_forms {
            form.enable(&profile.email);
        }
        for note in &mut page.contact_notes {
            *note = TextSlot::default();
        }
    }
}

/// Show the load failure message in every error target.
pub fn render_error(page: &mut Page) {
    for slot in &mut page.errors {
        slot.text = LOAD_FAILED_MESSAGE.to_string();
        slot.empty = false;
    }
    page.error_renders += 1;
}

/// Clear a previous failure message after a successful load.
pub(crate) fn clear_error(page: &mut Page) {
    for slot in &mut page.errors {
        *slot = TextSlot::default();
    }
}
