//! Persistence and incremental-merge logic for the cocktail collection.
//!
//! The collection lives in a single JSON file. A run reads it once,
//! appends the records it scraped, and rewrites the file once at the end;
//! the write goes through a temporary sibling file and a rename so a crash
//! mid-write never corrupts the previous state.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::{debug, warn};

use crate::error::ScrapeError;
use crate::model::{Cocktail, Collection, Metadata, ScrapeFailure};

pub struct CollectionStore {
    path: PathBuf,
    source: String,
}

impl CollectionStore {
    pub fn new(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted collection.
    ///
    /// A missing file is a normal first run. An unreadable or unparsable
    /// file degrades to an empty baseline with a warning: the run then
    /// re-scrapes everything rather than failing outright.
    pub fn load(&self) -> Collection {
        if !self.path.exists() {
            debug!("no existing collection at {}", self.path.display());
            return Collection::empty(&self.source);
        }

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    "could not read {}, starting from an empty collection: {}",
                    self.path.display(),
                    e
                );
                return Collection::empty(&self.source);
            }
        };

        match serde_json::from_str(&raw) {
            Ok(collection) => collection,
            Err(e) => {
                warn!(
                    "could not parse {}, starting from an empty collection: {}",
                    self.path.display(),
                    e
                );
                Collection::empty(&self.source)
            }
        }
    }

    /// Overwrite the persisted collection atomically.
    pub fn persist(&self, collection: &Collection) -> Result<(), ScrapeError> {
        let json = serde_json::to_string_pretty(collection)?;

        // Write to a temp file first, then rename over the target, so the
        // previous state survives a crash mid-write.
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, &json)?;
        fs::rename(&tmp_path, &self.path)?;

        debug!(
            "persisted {} cocktails to {}",
            collection.cocktails.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// The subsequence of `discovered` not yet present in `existing`, in
/// `discovered`'s order.
pub fn diff(existing: &Collection, discovered: &[String]) -> Vec<String> {
    discovered
        .iter()
        .filter(|url| !existing.contains_url(url))
        .cloned()
        .collect()
}

/// Append this run's records to the existing collection and recompute the
/// metadata. Existing records are never reordered or mutated; `errors`
/// holds the current run's failures only.
pub fn merge(
    existing: Collection,
    new_records: Vec<Cocktail>,
    failures: Vec<ScrapeFailure>,
) -> Collection {
    let mut cocktails = existing.cocktails;
    let total_new = new_records.len();
    cocktails.extend(new_records);

    Collection {
        metadata: Metadata {
            total_cocktails: cocktails.len(),
            total_new,
            total_errors: failures.len(),
            scraped_at: Utc::now(),
            source: existing.metadata.source,
        },
        cocktails,
        errors: failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cocktail(url: &str, title: &str) -> Cocktail {
        Cocktail {
            title: title.to_string(),
            category: None,
            ingredients: vec![],
            method: String::new(),
            garnish: String::new(),
            image: String::new(),
            video: String::new(),
            url: url.to_string(),
        }
    }

    fn collection_with(urls: &[&str]) -> Collection {
        let mut collection = Collection::empty("test");
        for url in urls {
            collection.cocktails.push(cocktail(url, "Some title"));
        }
        collection.metadata.total_cocktails = collection.cocktails.len();
        collection
    }

    #[test]
    fn diff_keeps_unknown_urls_in_discovery_order() {
        let existing = collection_with(&["a", "c"]);
        let discovered = vec![
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
            "d".to_string(),
        ];

        assert_eq!(diff(&existing, &discovered), vec!["b", "d"]);
    }

    #[test]
    fn diff_against_empty_collection_is_identity() {
        let existing = Collection::empty("test");
        let discovered = vec!["a".to_string(), "b".to_string()];

        assert_eq!(diff(&existing, &discovered), discovered);
    }

    #[test]
    fn diff_does_not_duplicate_or_reorder() {
        let existing = collection_with(&["b"]);
        let discovered = vec!["c".to_string(), "a".to_string(), "b".to_string()];

        assert_eq!(diff(&existing, &discovered), vec!["c", "a"]);
    }

    #[test]
    fn merge_with_no_new_records_keeps_cocktails_unchanged() {
        let existing = collection_with(&["a", "b"]);
        let before = existing.cocktails.clone();

        let merged = merge(existing, vec![], vec![]);

        assert_eq!(merged.cocktails, before);
        assert_eq!(merged.metadata.total_new, 0);
        assert_eq!(merged.metadata.total_errors, 0);
        assert_eq!(merged.metadata.total_cocktails, 2);
    }

    #[test]
    fn merge_appends_exactly_never_reorders() {
        let existing = collection_with(&["a", "b"]);
        let new_records = vec![cocktail("c", "Third"), cocktail("d", "Fourth")];

        let merged = merge(existing, new_records.clone(), vec![]);

        let urls: Vec<&str> = merged.cocktails.iter().map(|c| c.url.as_str()).collect();
        assert_eq!(urls, vec!["a", "b", "c", "d"]);
        assert_eq!(merged.cocktails[2..], new_records[..]);
        assert_eq!(merged.metadata.total_cocktails, 4);
        assert_eq!(merged.metadata.total_new, 2);
    }

    #[test]
    fn merge_records_current_run_failures() {
        let existing = collection_with(&["a"]);
        let failures = vec![ScrapeFailure {
            url: "x".to_string(),
            error: "No data extracted".to_string(),
        }];

        let merged = merge(existing, vec![], failures.clone());

        assert_eq!(merged.errors, failures);
        assert_eq!(merged.metadata.total_errors, 1);
    }
}
