/*!
 * Database entity models.
 *
 * These structures map directly to database rows and provide type-safe
 * access to persisted data. Movies and genres are read-only from this
 * library's perspective; an external loading process owns their tables.
 */

use serde::{Deserialize, Serialize};

/// A movie from the catalog, denormalized for display
///
/// `genres` flattens the movie→genres relation into a single comma-joined
/// string so that rendering a movie card needs no second round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Stable catalog identifier
    pub id: i64,
    /// Title in the original language
    pub title: String,
    /// ISO release date ("2010-07-16"), if known
    pub release_date: Option<String>,
    /// Average vote rating
    pub vote_average: f64,
    /// Plot overview in the original language
    pub overview: String,
    /// Comma-joined genre names (", " separated), empty if the movie has none
    pub genres: String,
}

impl Movie {
    /// Split the denormalized genre string back into individual names
    pub fn genre_names(&self) -> Vec<&str> {
        if self.genres.is_empty() {
            return Vec::new();
        }
        self.genres.split(", ").collect()
    }

    /// Four-digit release year, if a release date is present
    pub fn release_year(&self) -> Option<&str> {
        self.release_date.as_deref().and_then(|d| d.get(0..4))
    }
}

/// A genre from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    /// Stable catalog identifier
    pub id: i64,
    /// Genre name in the original language
    pub name: String,
}

/// A persisted translation cache row
///
/// The key is the literal `source_target_text` concatenation and is matched
/// exactly: no normalization, so case or whitespace differences produce
/// distinct entries. Rows never expire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationRecord {
    /// Exact-match cache key
    pub key: String,
    /// Cached translation (or the original text after a failed lookup)
    pub translated_text: String,
    /// Creation timestamp (ISO 8601)
    pub created_at: String,
}

impl TranslationRecord {
    /// Create a new cache record stamped with the current time
    pub fn new(key: String, translated_text: String) -> Self {
        Self {
            key,
            translated_text,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
