// Plain-text page output for `--once`.

use std::fmt;

use super::Page;

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(error) = self.error() {
            writeln!(f, "! {}", error)?;
        }

        for (key, slot) in self.fields() {
            if !slot.is_blank() {
                writeln!(f, "{:>12}: {}", key.label(), slot.text)?;
            }
        }
        for (key, slot) in self.links() {
            if let Some(href) = &slot.href {
                writeln!(f, "{:>12}: {}", key.label(), href)?;
            }
        }

        if let Some(cards) = self.stats().filter(|cards| !cards.is_empty()) {
            writeln!(f, "\nStats")?;
            for card in cards {
                writeln!(f, "  {:<14} {:>8}  {}", card.label, card.value, card.sub)?;
            }
        }

        if let Some(top) = self.top_language().filter(|slot| !slot.is_blank()) {
            writeln!(f, "\nTop language: {}", top.text)?;
        }
        if let Some(cards) = self.languages().filter(|cards| !cards.is_empty()) {
            for card in cards {
                writeln!(f, "  {:<14} {}", card.value, card.sub)?;
            }
        }

        if let Some(projects) = self.projects().filter(|cards| !cards.is_empty()) {
            writeln!(f, "\nProjects")?;
            for card in projects {
                let recent = if card.recent { " [recent]" } else { "" };
                writeln!(
                    f,
                    "  {} {} ({}, ★ {}, {}){}",
                    card.icon, card.title, card.language, card.stars, card.year, recent
                )?;
                writeln!(f, "      {}", card.description)?;
                writeln!(f, "      {}", card.source_url)?;
                if let Some(homepage) = &card.homepage {
                    writeln!(f, "      {}", homepage)?;
                }
            }
        }

        if let Some(timeline) = self.timeline().filter(|t| !t.entries.is_empty()) {
            writeln!(f, "\nTimeline")?;
            for event in &timeline.entries {
                writeln!(
                    f,
                    "  {:<14} {:<24} {}",
                    event.date_label, event.title, event.detail
                )?;
            }
        }

        if let Some(badges) = self.achievements().filter(|badges| !badges.is_empty()) {
            writeln!(f, "\nAchievements")?;
            for badge in badges {
                writeln!(f, "  {} {} ({})", badge.icon, badge.title, badge.desc)?;
            }
        }

        if let Some(note) = self.contact_note().filter(|slot| !slot.is_blank()) {
            writeln!(f, "\n{}", note.text)?;
        }

        Ok(())
    }
}
