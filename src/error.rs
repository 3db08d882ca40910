// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Content(ContentError),
}

/// Reasons a portfolio content file is rejected.
/// Used to provide user-friendly, localized warnings.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentError {
    /// The file could not be opened or read
    Io(String),

    /// The file is not valid TOML or does not match the expected shape
    Parse(String),

    /// No navigation items at all
    NoNavItems,

    /// A navigation item has an empty id
    EmptyNavId,

    /// Two navigation items share an id
    DuplicateNavId(String),

    /// A navigation item has an empty label
    EmptyNavLabel(String),

    /// A navigation item points at a section the page does not render
    UnknownSection(String),

    /// A skill level above 100
    SkillLevelOutOfRange { skill: String, level: u8 },
}

impl ContentError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ContentError::Io(_) => "error-content-io",
            ContentError::Parse(_) => "error-content-parse",
            ContentError::NoNavItems
            | ContentError::EmptyNavId
            | ContentError::DuplicateNavId(_)
            | ContentError::EmptyNavLabel(_)
            | ContentError::UnknownSection(_) => "error-content-navigation",
            ContentError::SkillLevelOutOfRange { .. } => "error-content-skills",
        }
    }
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Io(msg) => write!(f, "Cannot read content file: {}", msg),
            ContentError::Parse(msg) => write!(f, "Invalid content file: {}", msg),
            ContentError::NoNavItems => write!(f, "No navigation items"),
            ContentError::EmptyNavId => write!(f, "Navigation item with empty id"),
            ContentError::DuplicateNavId(id) => write!(f, "Duplicate navigation id: {}", id),
            ContentError::EmptyNavLabel(id) => {
                write!(f, "Navigation item '{}' has an empty label", id)
            }
            ContentError::UnknownSection(id) => write!(f, "Unknown section: {}", id),
            ContentError::SkillLevelOutOfRange { skill, level } => {
                write!(f, "Skill '{}' has level {} (max 100)", skill, level)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Content(e) => write!(f, "Content Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ContentError> for Error {
    fn from(err: ContentError) -> Self {
        Error::Content(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_error_produces_config_variant() {
        let parse_error = toml::from_str::<toml::Table>("= nope").unwrap_err();
        let err: Error = parse_error.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn content_error_i18n_keys() {
        assert_eq!(
            ContentError::Parse("x".into()).i18n_key(),
            "error-content-parse"
        );
        assert_eq!(
            ContentError::DuplicateNavId("about".into()).i18n_key(),
            "error-content-navigation"
        );
        assert_eq!(
            ContentError::SkillLevelOutOfRange {
                skill: "Rust".into(),
                level: 140
            }
            .i18n_key(),
            "error-content-skills"
        );
    }

    #[test]
    fn content_error_display_names_the_item() {
        let err: Error = ContentError::UnknownSection("blog".into()).into();
        assert_eq!(format!("{}", err), "Content Error: Unknown section: blog");
    }
}
