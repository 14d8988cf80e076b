// Page model.
// Render targets declared by the layout; renderers write into them, the UI reads them.

pub mod anchor;
pub mod contact;
mod print;
pub mod render;

pub use anchor::{Anchor, FieldKey, LinkKey};
pub use contact::ContactForm;
pub use render::{
    render_achievements, render_error, render_languages, render_profile, render_projects,
    render_stats, render_timeline, wire_contact,
};

use crate::portfolio::{Achievement, TimelineEvent};

/// A text element. `empty` marks a value replaced by its fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSlot {
    pub text: String,
    pub empty: bool,
}

impl TextSlot {
    /// Nothing has been rendered here yet.
    pub fn is_blank(&self) -> bool {
        self.text.is_empty() && !self.empty
    }
}

/// A link element. `empty` marks a link with no target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSlot {
    pub href: Option<String>,
    pub empty: bool,
}

/// Labelled figure, used for stats and languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    pub sub: String,
}

/// One project in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub name: String,
    pub title: String,
    pub description: String,
    pub language: String,
    pub icon: &'static str,
    pub category: &'static str,
    pub stars: u64,
    pub recent: bool,
    pub year: String,
    pub homepage: Option<String>,
    pub source_url: String,
}

/// Timeline container with its own display cap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    pub limit: Option<usize>,
    pub entries: Vec<TimelineEvent>,
}

/// The rendered portfolio. Containers exist only for anchors the layout declared;
/// a duplicated anchor gets one container per declaration.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub(crate) fields: Vec<(FieldKey, TextSlot)>,
    pub(crate) links: Vec<(LinkKey, LinkSlot)>,
    pub(crate) top_language: Vec<TextSlot>,
    pub(crate) languages: Vec<Vec<StatCard>>,
    pub(crate) stats: Vec<Vec<StatCard>>,
    pub(crate) achievements: Vec<Vec<Achievement>>,
    pub(crate) projects: Vec<Vec<ProjectCard>>,
    pub(crate) timelines: Vec<Timeline>,
    pub(crate) contact_forms: Vec<ContactForm>,
    pub(crate) contact_notes: Vec<TextSlot>,
    pub(crate) errors: Vec<TextSlot>,
    pub(crate) error_renders: usize,
}

impl Page {
    pub fn from_anchors(anchors: &[Anchor]) -> Self {
        let mut page = Page::default();
        for anchor in anchors {
            match *anchor {
                Anchor::Field(key) => page.fields.push((key, TextSlot::default())),
                Anchor::Link(key) => page.links.push((key, LinkSlot::default())),
                Anchor::TopLanguage => page.top_language.push(TextSlot::default()),
                Anchor::Languages => page.languages.push(Vec::new()),
                Anchor::Stats => page.stats.push(Vec::new()),
                Anchor::Achievements => page.achievements.push(Vec::new()),
                Anchor::Projects => page.projects.push(Vec::new()),
                Anchor::Experience(limit) => page.timelines.push(Timeline {
                    limit,
                    entries: Vec::new(),
                }),
                Anchor::ContactForm => page.contact_forms.push(ContactForm::default()),
                Anchor::ContactNote => page.contact_notes.push(TextSlot::default()),
                Anchor::Error => page.errors.push(TextSlot::default()),
            }
        }
        page
    }

    pub fn field(&self, key: FieldKey) -> Option<&TextSlot> {
        self.fields.iter().find(|(k, _)| *k == key).map(|(_, slot)| slot)
    }

    /// Declared fields in layout order.
    pub fn fields(&self) -> impl Iterator<Item = (FieldKey, &TextSlot)> {
        self.fields.iter().map(|(key, slot)| (*key, slot))
    }

    pub fn link(&self, key: LinkKey) -> Option<&LinkSlot> {
        self.links.iter().find(|(k, _)| *k == key).map(|(_, slot)| slot)
    }

    pub fn links(&self) -> impl Iterator<Item = (LinkKey, &LinkSlot)> {
        self.links.iter().map(|(key, slot)| (*key, slot))
    }

    pub fn top_language(&self) -> Option<&TextSlot> {
        self.top_language.first()
    }

    pub fn languages(&self) -> Option<&[StatCard]> {
        self.languages.first().map(Vec::as_slice)
    }

    pub fn stats(&self) -> Option<&[StatCard]> {
        self.stats.first().map(Vec::as_slice)
    }

    pub fn achievements(&self) -> Option<&[Achievement]> {
        self.achievements.first().map(Vec::as_slice)
    }

    pub fn projects(&self) -> Option<&[ProjectCard]> {
        self.projects.first().map(Vec::as_slice)
    }

    pub fn timeline(&self) -> Option<&Timeline> {
        self.timelines.first()
    }

    #[cfg(test)]
    pub fn timelines(&self) -> &[Timeline] {
        &self.timelines
    }

    pub fn contact_form(&self) -> Option<&ContactForm> {
        self.contact_forms.first()
    }

    pub fn contact_note(&self) -> Option<&TextSlot> {
        self.contact_notes.first()
    }

    /// First error message currently displayed.
    pub fn error(&self) -> Option<&str> {
        self.errors
            .iter()
            .find(|slot| !slot.text.is_empty())
            .map(|slot| slot.text.as_str())
    }

    /// How many times the error path has rendered into this page.
    pub fn error_renders(&self) -> usize {
        self.error_renders
    }

    pub(crate) fn fields_mut(&mut self, key: FieldKey) -> impl Iterator<Item = &mut TextSlot> {
        self.fields
            .iter_mut()
            .filter(move |(k, _)| *k == key)
            .map(|(_, slot)| slot)
    }

    pub(crate) fn links_mut(&mut self, key: LinkKey) -> impl Iterator<Item = &mut LinkSlot> {
        self.links
            .iter_mut()
            .filter(move |(k, _)| *k == key)
            .map(|(_, slot)| slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_has_only_declared_containers() {
        let page = Page::from_anchors(&[
            Anchor::Field(FieldKey::Name),
            Anchor::Projects,
            Anchor::Experience(Some(2)),
        ]);

        assert!(page.field(FieldKey::Name).unwrap().is_blank());
        assert!(page.field(FieldKey::Bio).is_none());
        assert_eq!(page.projects(), Some(&[][..]));
        assert!(page.languages().is_none());
        assert_eq!(page.timeline().unwrap().limit, Some(2));
        assert!(page.contact_form().is_none());
        assert_eq!(page.error(), None);
    }

    #[test]
    fn test_full_layout() {
        let page = Page::from_anchors(&Anchor::all());
        assert_eq!(page.fields().count(), FieldKey::ALL.len());
        assert_eq!(page.links().count(), LinkKey::ALL.len());
        assert!(page.contact_form().is_some());
        assert_eq!(page.error_renders(), 0);
    }
}
