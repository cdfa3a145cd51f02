//! Result types for extraction output.
//!
//! Records are plain data: optional fields stay `None` when the page had no
//! node for them. Sentinel text such as `<Unknown Language>` is a rendering
//! concern and never stored here.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::content_type::ContentType;

/// Base for every derived profile and repository URL.
pub const GITHUB_BASE_URL: &str = "https://github.com";

/// Canonical GitHub URL for a repository full name or a user id.
#[must_use]
pub fn github_url(path: &str) -> String {
    format!("{GITHUB_BASE_URL}/{path}")
}

/// One trending repository.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RepositoryRecord {
    /// 1-based position on the page.
    pub rank: usize,

    /// `owner/name`; the key of the record.
    #[serde(skip)]
    pub full_name: String,

    pub description: Option<String>,

    /// Primary language as shown by GitHub.
    pub language: Option<String>,

    /// Star count exactly as printed, thousands separators included.
    pub stars: Option<String>,

    /// Always `https://github.com/{full_name}`.
    pub url: String,
}

impl RepositoryRecord {
    #[must_use]
    pub fn new(
        rank: usize,
        full_name: String,
        description: Option<String>,
        language: Option<String>,
        stars: Option<String>,
    ) -> Self {
        let url = github_url(&full_name);
        Self {
            rank,
            full_name,
            description,
            language,
            stars,
            url,
        }
    }
}

/// One trending developer.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DeveloperRecord {
    pub rank: usize,

    /// Display name; the key of the record.
    #[serde(skip)]
    pub name: String,

    /// Login. Falls back to the display name when the page shows none.
    pub user_id: String,

    /// Name of the developer's highlighted repository.
    pub repository: Option<String>,

    /// Description of the highlighted repository.
    pub description: Option<String>,

    /// Always `https://github.com/{user_id}`.
    pub url: String,
}

impl DeveloperRecord {
    #[must_use]
    pub fn new(
        rank: usize,
        name: String,
        user_id: String,
        repository: Option<String>,
        description: Option<String>,
    ) -> Self {
        let url = github_url(&user_id);
        Self {
            rank,
            name,
            user_id,
            repository,
            description,
            url,
        }
    }
}

/// A record of either content type.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum TrendingRecord {
    Repository(RepositoryRecord),
    Developer(DeveloperRecord),
}

impl TrendingRecord {
    /// Key the record is stored under.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Repository(r) => &r.full_name,
            Self::Developer(d) => &d.name,
        }
    }

    #[must_use]
    pub fn rank(&self) -> usize {
        match self {
            Self::Repository(r) => r.rank,
            Self::Developer(d) => d.rank,
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Repository(r) => &r.url,
            Self::Developer(d) => &d.url,
        }
    }
}

/// Ordered, key-unique collection of records.
///
/// Iteration follows first insertion. Inserting an existing key replaces the
/// stored record but keeps its original position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trending {
    content_type: ContentType,
    records: Vec<TrendingRecord>,
    index: HashMap<String, usize>,
}

impl Trending {
    #[must_use]
    pub fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_capacity(content_type: ContentType, capacity: usize) -> Self {
        Self {
            content_type,
            records: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Insert or update in place. Returns the record that was replaced.
    pub fn insert(&mut self, record: TrendingRecord) -> Option<TrendingRecord> {
        if let Some(&pos) = self.index.get(record.key()) {
            return Some(std::mem::replace(&mut self.records[pos], record));
        }
        self.index.insert(record.key().to_string(), self.records.len());
        self.records.push(record);
        None
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TrendingRecord> {
        self.index.get(key).map(|&pos| &self.records[pos])
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in iteration order.
    pub fn iter(&self) -> std::slice::Iter<'_, TrendingRecord> {
        self.records.iter()
    }

    /// Keys in iteration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(TrendingRecord::key)
    }
}

impl<'a> IntoIterator for &'a Trending {
    type Item = &'a TrendingRecord;
    type IntoIter = std::slice::Iter<'a, TrendingRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Serializes as a JSON object `{ key: record }` in iteration order.
impl Serialize for Trending {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for record in &self.records {
            map.serialize_entry(record.key(), record)?;
        }
        map.end()
    }
}
