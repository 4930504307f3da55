use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single extracted cocktail recipe.
///
/// `title` is always present (empty string on a failed extraction, never
/// null). `url` is the record's unique key within a [`Collection`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cocktail {
    pub title: String,
    pub category: Option<String>,
    pub ingredients: Vec<String>,
    pub method: String,
    pub garnish: String,
    pub image: String,
    pub video: String,
    pub url: String,
}

/// A URL that failed extraction during the current run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeFailure {
    pub url: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub total_cocktails: usize,
    pub total_new: usize,
    pub total_errors: usize,
    pub scraped_at: DateTime<Utc>,
    pub source: String,
}

/// The persisted dataset: metadata plus the append-only cocktail list.
///
/// `errors` holds the current run's failures only; each rewrite replaces
/// the previous run's list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub metadata: Metadata,
    pub cocktails: Vec<Cocktail>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ScrapeFailure>,
}

impl Collection {
    /// Baseline used when no prior state exists (or it could not be read).
    pub fn empty(source: impl Into<String>) -> Self {
        Self {
            metadata: Metadata {
                total_cocktails: 0,
                total_new: 0,
                total_errors: 0,
                scraped_at: Utc::now(),
                source: source.into(),
            },
            cocktails: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn contains_url(&self, url: &str) -> bool {
        self.cocktails.iter().any(|c| c.url == url)
    }
}
