//! Query options for a trending lookup.
//!
//! A [`Query`] says which list to read and how to filter it. It knows how to
//! check itself and how to turn itself into the trending page URL.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::content_type::ContentType;
use crate::error::{Error, Result};
use crate::languages;

/// Default trending page location.
pub const DEFAULT_BASE_URL: &str = "https://github.com/trending";

/// Time window for trending statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Period {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    pub const ALL: [Self; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown period: {s} (expected daily, weekly or monthly)"))
    }
}

/// What to fetch from the trending page.
///
/// # Example
///
/// ```rust
/// use git_trend::{ContentType, Period, Query};
///
/// let query = Query {
///     language: Some("rust".to_string()),
///     period: Period::Weekly,
///     ..Query::new(ContentType::Repositories)
/// };
/// let url = query.url("https://github.com/trending")?;
/// assert_eq!(url.as_str(), "https://github.com/trending/rust?since=weekly");
/// # Ok::<(), git_trend::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Repositories or developers.
    pub content_type: ContentType,

    /// Default: `Period::Daily`
    pub period: Period,

    /// Programming language slug, see [`languages::PROGRAMMING_LANGUAGES`].
    ///
    /// Default: `None`
    pub language: Option<String>,

    /// ISO 639-1 code of the spoken language. Repositories only.
    ///
    /// Default: `None`
    pub spoken_language: Option<String>,
}

impl Query {
    #[must_use]
    pub fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            period: Period::default(),
            language: None,
            spoken_language: None,
        }
    }

    /// Reject filters the trending page does not support.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidQuery`] for an unknown language or spoken language,
    /// or a spoken language filter on the developers list.
    pub fn validate(&self) -> Result<()> {
        if let Some(language) = &self.language {
            if !languages::is_supported_language(language) {
                return Err(Error::InvalidQuery(format!(
                    "unsupported language {language:?}; use --languages to list supported languages"
                )));
            }
        }

        if let Some(code) = &self.spoken_language {
            if self.content_type == ContentType::Developers {
                return Err(Error::InvalidQuery(
                    "--spoken-language is only supported for repositories".to_string(),
                ));
            }
            if !languages::is_supported_spoken_language(code) {
                return Err(Error::InvalidQuery(format!(
                    "unsupported spoken language {code:?}; use --spoken-languages to list supported codes"
                )));
            }
        }

        Ok(())
    }

    /// Trending page URL for this query under `base`.
    ///
    /// `base` is the `/trending` location, normally [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidQuery`] if `base` is not an absolute URL.
    pub fn url(&self, base: &str) -> Result<Url> {
        let mut url =
            Url::parse(base).map_err(|e| Error::InvalidQuery(format!("bad base URL {base:?}: {e}")))?;

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| Error::InvalidQuery(format!("base URL {base:?} cannot have a path")))?;
            segments.pop_if_empty();
            if let Some(segment) = self.content_type.path_segment() {
                segments.push(segment);
            }
            if let Some(language) = &self.language {
                segments.push(language);
            }
        }

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("since", self.period.as_str());
            if let Some(code) = &self.spoken_language {
                pairs.append_pair("spoken_language_code", code);
            }
        }

        Ok(url)
    }
}
