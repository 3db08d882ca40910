// SPDX-License-Identifier: MPL-2.0
//! Portfolio content: the personal data rendered by the page.
//!
//! The content ships embedded in the binary (`assets/content/portfolio.toml`)
//! and can be replaced at startup with `--content <file>`. A replacement that
//! does not parse or does not validate is ignored in favor of the embedded
//! copy, and the reason is reported back as an i18n warning key.

use crate::error::ContentError;
use crate::nav::NavItem;
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct Asset;

const PORTFOLIO_FILE: &str = "portfolio.toml";
const DOCUMENTATION_FILE: &str = "documentation.md";

/// Highest accepted skill level (a percentage).
pub const MAX_SKILL_LEVEL: u8 = 100;

/// The sections the page knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Hero,
    About,
    Projects,
    Skills,
    Contact,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Projects,
        SectionKind::Skills,
        SectionKind::Contact,
    ];

    /// Anchor id used by navigation items.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::About => "about",
            SectionKind::Projects => "projects",
            SectionKind::Skills => "skills",
            SectionKind::Contact => "contact",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

/// A labelled outbound link (social profile, project repository, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    /// Professional title, typed out character by character in the hero.
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct About {
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub code_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Projects {
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub items: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

impl Skill {
    /// Fill ratio of the skill bar, in `[0, 1]`.
    #[must_use]
    pub fn ratio(&self) -> f32 {
        f32::from(self.level.min(MAX_SKILL_LEVEL)) / f32::from(MAX_SKILL_LEVEL)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub categories: Vec<SkillCategory>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub blurb: String,
    #[serde(default)]
    pub entries: Vec<ContactEntry>,
    #[serde(default)]
    pub social: Vec<Link>,
}

/// Everything the portfolio page displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub owner: Owner,
    /// Navigation entries, in page order. Each id names a section.
    pub navigation: Vec<NavItem>,
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub projects: Projects,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub contact: Contact,
}

impl Default for PortfolioContent {
    /// Bare page with one navigation entry per known section.
    fn default() -> Self {
        Self {
            owner: Owner::default(),
            navigation: SectionKind::ALL
                .into_iter()
                .map(|kind| NavItem::new(kind.id(), kind.id()))
                .collect(),
            about: About::default(),
            projects: Projects::default(),
            skills: Skills::default(),
            contact: Contact::default(),
        }
    }
}

impl PortfolioContent {
    /// Parses and validates content from TOML text.
    pub fn from_toml(source: &str) -> Result<Self, ContentError> {
        let content: Self = toml::from_str(source).map_err(|e| ContentError::Parse(e.to_string()))?;
        content.validate()?;
        Ok(content)
    }

    /// Checks the rules the page relies on: navigation ids are non-empty,
    /// unique and name known sections, labels are non-empty, and skill
    /// levels are percentages.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.navigation.is_empty() {
            return Err(ContentError::NoNavItems);
        }

        let mut seen = HashSet::new();
        for item in &self.navigation {
            if item.id.trim().is_empty() {
                return Err(ContentError::EmptyNavId);
            }
            if !seen.insert(item.id.as_str()) {
                return Err(ContentError::DuplicateNavId(item.id.clone()));
            }
            if item.label.trim().is_empty() {
                return Err(ContentError::EmptyNavLabel(item.id.clone()));
            }
            if SectionKind::from_id(&item.id).is_none() {
                return Err(ContentError::UnknownSection(item.id.clone()));
            }
        }

        let out_of_range = self
            .skills
            .categories
            .iter()
            .flat_map(|category| &category.skills)
            .find(|skill| skill.level > MAX_SKILL_LEVEL);
        if let Some(skill) = out_of_range {
            return Err(ContentError::SkillLevelOutOfRange {
                skill: skill.name.clone(),
                level: skill.level,
            });
        }

        Ok(())
    }

    /// Sections in page order, as listed by the navigation.
    pub fn sections(&self) -> impl Iterator<Item = (SectionKind, &NavItem)> {
        self.navigation
            .iter()
            .filter_map(|item| SectionKind::from_id(&item.id).map(|kind| (kind, item)))
    }
}

/// Parses the embedded portfolio content.
#[must_use]
pub fn embedded() -> PortfolioContent {
    let Some(file) = Asset::get(PORTFOLIO_FILE) else {
        tracing::error!(file = PORTFOLIO_FILE, "embedded content missing");
        return PortfolioContent::default();
    };
    let source = String::from_utf8_lossy(file.data.as_ref());
    match PortfolioContent::from_toml(&source) {
        Ok(content) => content,
        Err(error) => {
            tracing::error!(%error, "embedded content rejected");
            PortfolioContent::default()
        }
    }
}

/// Loads content from `override_path` when given, falling back to the
/// embedded copy.
///
/// Returns the content and, when the override was rejected, the i18n key of
/// a warning explaining why.
pub fn load(override_path: Option<&Path>) -> (PortfolioContent, Option<String>) {
    let Some(path) = override_path else {
        return (embedded(), None);
    };

    match load_from_path(path) {
        Ok(content) => {
            tracing::info!(path = %path.display(), "content loaded");
            (content, None)
        }
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                %error,
                "content file rejected, using embedded content"
            );
            (embedded(), Some(error.i18n_key().to_string()))
        }
    }
}

/// Reads and validates a content file.
pub fn load_from_path(path: &Path) -> Result<PortfolioContent, ContentError> {
    let source = fs::read_to_string(path).map_err(|e| ContentError::Io(e.to_string()))?;
    PortfolioContent::from_toml(&source)
}

/// Markdown source of the documentation screen.
#[must_use]
pub fn documentation() -> Cow<'static, str> {
    match Asset::get(DOCUMENTATION_FILE) {
        Some(file) => match file.data {
            Cow::Borrowed(bytes) => String::from_utf8_lossy(bytes),
            Cow::Owned(bytes) => Cow::Owned(String::from_utf8_lossy(&bytes).into_owned()),
        },
        None => {
            tracing::error!(file = DOCUMENTATION_FILE, "embedded documentation missing");
            Cow::Borrowed("")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL: &str = r#"
        [owner]
        name = "Ada"
        title = "Engineer"

        [[navigation]]
        id = "hero"
        label = "Home"

        [[navigation]]
        id = "contact"
        label = "Contact"
    "#;

    #[test]
    fn embedded_content_is_valid() {
        let content = embedded();
        assert!(content.validate().is_ok());
        assert!(!content.owner.name.is_empty());
        let ids: Vec<&str> = content.navigation.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, ["hero", "about", "projects", "skills", "contact"]);
    }

    #[test]
    fn minimal_content_fills_optional_sections() {
        let content = PortfolioContent::from_toml(MINIMAL).expect("minimal content parses");
        assert_eq!(content.navigation.len(), 2);
        assert!(content.projects.items.is_empty());
        let kinds: Vec<SectionKind> = content.sections().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, [SectionKind::Hero, SectionKind::Contact]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut content = PortfolioContent::default();
        content.navigation.push(NavItem::new("about", "Again"));
        assert_eq!(
            content.validate(),
            Err(ContentError::DuplicateNavId("about".into()))
        );
    }

    #[test]
    fn unknown_and_empty_entries_are_rejected() {
        let mut content = PortfolioContent::default();
        content.navigation = vec![NavItem::new("blog", "Blog")];
        assert_eq!(content.validate(), Err(ContentError::UnknownSection("blog".into())));

        content.navigation = vec![NavItem::new("", "Nothing")];
        assert_eq!(content.validate(), Err(ContentError::EmptyNavId));

        content.navigation = vec![NavItem::new("hero", "  ")];
        assert_eq!(content.validate(), Err(ContentError::EmptyNavLabel("hero".into())));

        content.navigation.clear();
        assert_eq!(content.validate(), Err(ContentError::NoNavItems));
    }

    #[test]
    fn skill_levels_above_100_are_rejected() {
        let mut content = PortfolioContent::default();
        content.skills.categories.push(SkillCategory {
            name: "Languages".into(),
            skills: vec![Skill {
                name: "Rust".into(),
                level: 120,
            }],
        });
        let err = content.validate().unwrap_err();
        assert_eq!(err.i18n_key(), "error-content-skills");
    }

    #[test]
    fn skill_ratio_is_clamped() {
        let skill = Skill {
            name: "Rust".into(),
            level: 250,
        };
        assert_eq!(skill.ratio(), 1.0);
        let skill = Skill {
            name: "Go".into(),
            level: 50,
        };
        assert_eq!(skill.ratio(), 0.5);
    }

    #[test]
    fn invalid_override_falls_back_with_warning() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "this is = = not toml").expect("write");

        let (content, warning) = load(Some(file.path()));
        assert_eq!(content, embedded());
        assert_eq!(warning.as_deref(), Some("error-content-parse"));
    }

    #[test]
    fn missing_override_reports_an_io_warning() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing.toml");

        assert!(matches!(load_from_path(&path), Err(ContentError::Io(_))));
        let (content, warning) = load(Some(&path));
        assert_eq!(content, embedded());
        assert_eq!(warning.as_deref(), Some("error-content-io"));
    }

    #[test]
    fn valid_override_replaces_embedded_content() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(file, "{MINIMAL}").expect("write");

        let (content, warning) = load(Some(file.path()));
        assert!(warning.is_none());
        assert_eq!(content.owner.name, "Ada");
    }

    #[test]
    fn documentation_is_embedded() {
        assert!(documentation().starts_with('#'));
    }
}
