//! Content-type dispatch.
//!
//! The trending page comes in two flavours that share page structure but
//! differ in row markup and record shape. [`ContentType::rules`] is the single
//! point where that difference is decided.

use std::fmt;
use std::str::FromStr;

use crate::selector::rules::{Rules, DEVELOPER_RULES, REPOSITORY_RULES};

/// Which trending list to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Repositories,
    Developers,
}

impl ContentType {
    /// Item and field selectors for this content type.
    #[must_use]
    pub fn rules(self) -> &'static Rules {
        match self {
            Self::Repositories => &REPOSITORY_RULES,
            Self::Developers => &DEVELOPER_RULES,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Repositories => "repositories",
            Self::Developers => "developers",
        }
    }

    /// Path segment appended to `/trending`, if any.
    #[must_use]
    pub const fn path_segment(self) -> Option<&'static str> {
        match self {
            Self::Repositories => None,
            Self::Developers => Some("developers"),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "repositories" | "repos" => Ok(Self::Repositories),
            "developers" | "devs" => Ok(Self::Developers),
            other => Err(format!("unknown content type: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::rules::FieldRules;

    #[test]
    fn test_rules_dispatch() {
        assert!(matches!(
            ContentType::Repositories.rules().fields,
            FieldRules::Repository(_)
        ));
        assert!(matches!(
            ContentType::Developers.rules().fields,
            FieldRules::Developer(_)
        ));
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("repos".parse(), Ok(ContentType::Repositories));
        assert_eq!("Developers".parse(), Ok(ContentType::Developers));
        assert!("users".parse::<ContentType>().is_err());
        assert_eq!(ContentType::Developers.to_string(), "developers");
    }
}
