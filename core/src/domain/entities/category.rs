//! Category domain entities
//!
//! The key→label mapping shipped with the feed, and the selector that
//! decides which category the list view shows.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sentinel selector value meaning "every category"
pub const ALL_CATEGORIES: &str = "all";

/// Ordered mapping from category key to display label.
///
/// Keeps the key order of the source document so tabs render in the
/// order the feed author wrote them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMapping {
    entries: Vec<(String, String)>,
}

impl CategoryMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a label, keeping the original position on replace
    pub fn insert(&mut self, key: impl Into<String>, label: impl Into<String>) {
        let key = key.into();
        let label = label.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = label,
            None => self.entries.push((key, label)),
        }
    }

    pub fn label(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, label)| label.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.label(key).is_some()
    }

    /// Iterate `(key, label)` pairs in document order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for CategoryMapping
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = CategoryMapping::new();
        for (key, label) in iter {
            mapping.insert(key, label);
        }
        mapping
    }
}

impl Serialize for CategoryMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, label) in &self.entries {
            map.serialize_entry(key, label)?;
        }
        map.end()
    }
}

struct CategoryMappingVisitor;

impl<'de> Visitor<'de> for CategoryMappingVisitor {
    type Value = CategoryMapping;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of category keys to labels")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut mapping = CategoryMapping::new();
        while let Some((key, label)) = access.next_entry::<String, String>()? {
            mapping.insert(key, label);
        }
        Ok(mapping)
    }
}

impl<'de> Deserialize<'de> for CategoryMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CategoryMappingVisitor)
    }
}

/// Which category the list view shows
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategorySelector {
    #[default]
    All,
    Key(String),
}

impl CategorySelector {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategorySelector::All => true,
            CategorySelector::Key(key) => key == category,
        }
    }

    /// Whether a tab keyed `key` is the selected one.
    ///
    /// The sentinel compares by its string form, so a mapping key named
    /// `"all"` is selected by `All`.
    pub fn is_key(&self, key: &str) -> bool {
        match self {
            CategorySelector::All => key == ALL_CATEGORIES,
            CategorySelector::Key(selected) => selected == key,
        }
    }
}

impl From<&str> for CategorySelector {
    fn from(s: &str) -> Self {
        if s == ALL_CATEGORIES {
            CategorySelector::All
        } else {
            CategorySelector::Key(s.to_string())
        }
    }
}

impl From<String> for CategorySelector {
    fn from(s: String) -> Self {
        if s == ALL_CATEGORIES {
            CategorySelector::All
        } else {
            CategorySelector::Key(s)
        }
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorySelector::All => write!(f, "{}", ALL_CATEGORIES),
            CategorySelector::Key(key) => write!(f, "{}", key),
        }
    }
}
