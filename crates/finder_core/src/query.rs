use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::tags::canonical_tag;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Neither ingredients nor tags were provided; nothing may be sent.
    #[error("no ingredients or tags provided")]
    EmptyQuery,
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),
    #[error("unknown index variant: {0}")]
    UnknownIndexVariant(String),
}

/// Ordering the search service applies to its matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    MatchedIngredients,
    TotalTime,
    NumSteps,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [
        SortKey::MatchedIngredients,
        SortKey::TotalTime,
        SortKey::NumSteps,
    ];

    /// Wire name sent as `sort_by`.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::MatchedIngredients => "matched_ingredients",
            SortKey::TotalTime => "total_time",
            SortKey::NumSteps => "num_steps",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::MatchedIngredients => "Matched Ingredients",
            SortKey::TotalTime => "Total Time",
            SortKey::NumSteps => "Number of Steps",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| QueryError::UnknownSortKey(wanted.to_string()))
    }
}

/// Ingredient index the search service should use. Never interpreted locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexVariant {
    #[default]
    Trie,
    HashMap,
}

impl IndexVariant {
    pub const ALL: [IndexVariant; 2] = [IndexVariant::Trie, IndexVariant::HashMap];

    /// Wire name sent as `data_structure` and used in detail paths.
    pub fn as_str(self) -> &'static str {
        match self {
            IndexVariant::Trie => "trie",
            IndexVariant::HashMap => "hashmap",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IndexVariant::Trie => "Trie",
            IndexVariant::HashMap => "HashMap",
        }
    }
}

impl fmt::Display for IndexVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndexVariant {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        IndexVariant::ALL
            .into_iter()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| QueryError::UnknownIndexVariant(wanted.to_string()))
    }
}

/// Selected tags, restricted to the fixed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagSet {
    tags: Vec<&'static str>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `tag`. Returns false (and changes nothing) when the
    /// tag is not part of the vocabulary.
    pub fn toggle(&mut self, tag: &str) -> bool {
        let Some(tag) = canonical_tag(tag) else {
            return false;
        };
        if let Some(pos) = self.tags.iter().position(|t| *t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag);
        }
        true
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| *t == tag)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tags.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.tags.iter().map(|t| (*t).to_string()).collect()
    }
}

/// Immutable snapshot of one search submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub ingredients: Vec<String>,
    pub tags: Vec<String>,
    pub sort_key: SortKey,
    pub index_variant: IndexVariant,
}

/// Splits comma-separated input into trimmed, non-empty ingredients.
///
/// Order and duplicates are preserved.
pub fn parse_ingredients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

pub fn normalize(
    raw: &str,
    tags: &TagSet,
    sort_key: SortKey,
    index_variant: IndexVariant,
) -> Result<SearchQuery, QueryError> {
    let ingredients = parse_ingredients(raw);
    if ingredients.is_empty() && tags.is_empty() {
        return Err(QueryError::EmptyQuery);
    }
    Ok(SearchQuery {
        ingredients,
        tags: tags.to_vec(),
        sort_key,
        index_variant,
    })
}

/// What the next search will request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryStore {
    ingredients_text: String,
    tags: TagSet,
    sort_key: SortKey,
    index_variant: IndexVariant,
}

impl QueryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(sort_key: SortKey, index_variant: IndexVariant) -> Self {
        Self {
            sort_key,
            index_variant,
            ..Self::default()
        }
    }

    pub fn ingredients_text(&self) -> &str {
        &self.ingredients_text
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn index_variant(&self) -> IndexVariant {
        self.index_variant
    }

    pub fn set_ingredients_text(&mut self, text: impl Into<String>) {
        self.ingredients_text = text.into();
    }

    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        self.tags.toggle(tag)
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    pub fn set_index_variant(&mut self, variant: IndexVariant) {
        self.index_variant = variant;
    }

    pub fn snapshot(&self) -> Result<SearchQuery, QueryError> {
        normalize(
            &self.ingredients_text,
            &self.tags,
            self.sort_key,
            self.index_variant,
        )
    }
}
