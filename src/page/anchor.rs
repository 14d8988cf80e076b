// Page anchors.
// The named render targets a layout can declare, parsed from attribute-style strings.

use std::fmt;
use std::str::FromStr;

use crate::error::FolioError;

/// Profile text fields (`gh=<field>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKey {
    Name,
    Login,
    Bio,
    Location,
    Company,
    Followers,
    Repos,
    Joined,
    Website,
    Email,
    Twitter,
    Avatar,
}

impl FieldKey {
    pub const ALL: [FieldKey; 12] = [
        FieldKey::Name,
        FieldKey::Login,
        FieldKey::Bio,
        FieldKey::Location,
        FieldKey::Company,
        FieldKey::Followers,
        FieldKey::Repos,
        FieldKey::Joined,
        FieldKey::Website,
        FieldKey::Email,
        FieldKey::Twitter,
        FieldKey::Avatar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Name => "name",
            FieldKey::Login => "login",
            FieldKey::Bio => "bio",
            FieldKey::Location => "location",
            FieldKey::Company => "company",
            FieldKey::Followers => "followers",
            FieldKey::Repos => "repos",
            FieldKey::Joined => "joined",
            FieldKey::Website => "website",
            FieldKey::Email => "email",
            FieldKey::Twitter => "twitter",
            FieldKey::Avatar => "avatar",
        }
    }

    /// Label shown next to the value in the About panel.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKey::Name => "Name",
            FieldKey::Login => "Login",
            FieldKey::Bio => "Bio",
            FieldKey::Location => "Location",
            FieldKey::Company => "Company",
            FieldKey::Followers => "Followers",
            FieldKey::Repos => "Repositories",
            FieldKey::Joined => "Joined",
            FieldKey::Website => "Website",
            FieldKey::Email => "Email",
            FieldKey::Twitter => "Twitter",
            FieldKey::Avatar => "Avatar",
        }
    }
}

impl FromStr for FieldKey {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| FolioError::UnknownAnchor(format!("gh={}", s)))
    }
}

/// Link targets (`gh-link=<link>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LinkKey {
    Github,
    Twitter,
    Blog,
    Email,
}

impl LinkKey {
    pub const ALL: [LinkKey; 4] = [LinkKey::Github, LinkKey::Twitter, LinkKey::Blog, LinkKey::Email];

    pub fn as_str(&self) -> &'static str {
        match self {
            LinkKey::Github => "github",
            LinkKey::Twitter => "twitter",
            LinkKey::Blog => "blog",
            LinkKey::Email => "email",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LinkKey::Github => "GitHub",
            LinkKey::Twitter => "Twitter",
            LinkKey::Blog => "Website",
            LinkKey::Email => "Email",
        }
    }
}

impl FromStr for LinkKey {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LinkKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| FolioError::UnknownAnchor(format!("gh-link={}", s)))
    }
}

/// A render target declared by the page layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Field(FieldKey),
    Link(LinkKey),
    TopLanguage,
    Languages,
    Stats,
    Achievements,
    Projects,
    /// Timeline, optionally capped to a number of entries.
    Experience(Option<usize>),
    ContactForm,
    ContactNote,
    Error,
}

impl Anchor {
    /// Every anchor once, with an uncapped timeline.
    pub fn all() -> Vec<Anchor> {
        let mut anchors: Vec<Anchor> = FieldKey::ALL.into_iter().map(Anchor::Field).collect();
        anchors.extend(LinkKey::ALL.into_iter().map(Anchor::Link));
        anchors.extend([
            Anchor::TopLanguage,
            Anchor::Languages,
            Anchor::Stats,
            Anchor::Achievements,
            Anchor::Projects,
            Anchor::Experience(None),
            Anchor::ContactForm,
            Anchor::ContactNote,
            Anchor::Error,
        ]);
        anchors
    }

    /// Parse a comma-separated layout.
    pub fn parse_list(layout: &str) -> Result<Vec<Anchor>, FolioError> {
        layout
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl FromStr for Anchor {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = match s.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (s, None),
        };

        match (name, value) {
            ("gh", Some(field)) => Ok(Anchor::Field(field.parse()?)),
            ("gh-link", Some(link)) => Ok(Anchor::Link(link.parse()?)),
            ("gh-languages-placeholder", None) => Ok(Anchor::TopLanguage),
            ("gh-languages", None) => Ok(Anchor::Languages),
            ("gh-stats", None) => Ok(Anchor::Stats),
            ("gh-achievements", None) => Ok(Anchor::Achievements),
            ("projects-grid", None) => Ok(Anchor::Projects),
            ("experience", None) => Ok(Anchor::Experience(None)),
            ("experience", Some(limit)) => limit
                .parse()
                .map(|limit| Anchor::Experience(Some(limit)))
                .map_err(|_| FolioError::UnknownAnchor(s.to_string())),
            ("contact-form", None) => Ok(Anchor::ContactForm),
            ("contact-note", None) => Ok(Anchor::ContactNote),
            ("gh-error", None) => Ok(Anchor::Error),
            _ => Err(FolioError::UnknownAnchor(s.to_string())),
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anchor::Field(key) => write!(f, "gh={}", key.as_str()),
            Anchor::Link(key) => write!(f, "gh-link={}", key.as_str()),
            Anchor::TopLanguage => f.write_str("gh-languages-placeholder"),
            Anchor::Languages => f.write_str("gh-languages"),
            Anchor::Stats => f.write_str("gh-stats"),
            Anchor::Achievements => f.write_str("gh-achievements"),
            Anchor::Projects => f.write_str("projects-grid"),
            Anchor::Experience(None) => f.write_str("experience"),
            Anchor::Experience(Some(limit)) => write!(f, "experience={}", limit),
            Anchor::ContactForm => f.write_str("contact-form"),
            Anchor::ContactNote => f.write_str("contact-note"),
            Anchor::Error => f.write_str("gh-error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_anchors() {
        assert_eq!("gh=bio".parse::<Anchor>().unwrap(), Anchor::Field(FieldKey::Bio));
        assert_eq!(
            "gh-link=email".parse::<Anchor>().unwrap(),
            Anchor::Link(LinkKey::Email)
        );
        assert_eq!(
            "experience=3".parse::<Anchor>().unwrap(),
            Anchor::Experience(Some(3))
        );
        assert_eq!("gh-error".parse::<Anchor>().unwrap(), Anchor::Error);
    }

    #[test]
    fn test_unknown_anchors_are_rejected() {
        for bad in ["gh=shoe-size", "gh-link=myspace", "experience=lots", "sidebar", "gh"] {
            let err = bad.parse::<Anchor>().unwrap_err();
            assert!(matches!(err, FolioError::UnknownAnchor(_)), "{bad}");
        }
    }

    #[test]
    fn test_display_round_trips_every_anchor() {
        for anchor in Anchor::all() {
            assert_eq!(anchor.to_string().parse::<Anchor>().unwrap(), anchor);
        }
        let capped = Anchor::Experience(Some(2));
        assert_eq!(capped.to_string(), "experience=2");
    }

    #[test]
    fn test_parse_list() {
        let anchors = Anchor::parse_list("gh=name, gh-error,,projects-grid").unwrap();
        assert_eq!(
            anchors,
            vec![
                Anchor::Field(FieldKey::Name),
                Anchor::Error,
                Anchor::Projects,
            ]
        );
        assert!(Anchor::parse_list("gh=name,nope").is_err());
    }
}
