// Portfolio domain module.
// Normalized profile, derived repository stats, achievements, and display formatting.

pub mod achievements;
pub mod derive;
pub mod format;
pub mod profile;

pub use achievements::{Achievement, achievements, language_badge};
pub use derive::{
    LanguageStats, TimelineEvent, active_repos, is_recently_updated, language_stats,
    top_repos, total_stars, timeline,
};
pub use profile::{Profile, normalize_profile};
