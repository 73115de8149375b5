use serde::{Deserialize, Serialize};

/// API record model - the star of the show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub use_case: Option<String>,
    pub docs_url: String,
    pub auth: AuthKind,
    pub https: bool,
    pub metadata: ApiMetadata,
}

impl ApiRecord {
    /// Tags, always present. Records loaded from JSON may omit the field.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Use-case text, empty string when the record has none.
    pub fn use_case(&self) -> &str {
        self.use_case.as_deref().unwrap_or("")
    }

    pub fn popularity(&self) -> u32 {
        self.metadata.popularity
    }
}

/// How callers authenticate against the upstream API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthKind {
    None,
    ApiKey,
    #[serde(rename = "oauth")]
    OAuth,
}

impl std::fmt::Display for AuthKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthKind::None => write!(f, "none"),
            AuthKind::ApiKey => write!(f, "API key"),
            AuthKind::OAuth => write!(f, "OAuth"),
        }
    }
}

/// Descriptive numbers attached to a record. Popularity is the only one the
/// engine acts on; the rest are display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiMetadata {
    pub popularity: u32,
    #[serde(default)]
    pub latency_ms: Option<u32>,
    #[serde(default)]
    pub uptime_pct: Option<f32>,
}

/// One entry of the fixed category enumeration. `count` is part of the
/// enumeration, not derived from the catalog at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub count: usize,
}

/// Active category restriction for a search
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Id(String),
}

impl CategoryFilter {
    pub fn matches(&self, record: &ApiRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Id(id) => record.category == *id,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

/// Autocomplete hint - lighter than a full search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Api,
    Category,
}
