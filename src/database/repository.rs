/*!
 * Repository layer for database operations.
 *
 * This module provides a high-level API for all database operations,
 * abstracting away the SQL details and providing type-safe access. Catalog
 * reads return denormalized movies: core fields plus a comma-joined genre
 * string, so callers never need a second query for genre names.
 */

use anyhow::Result;
use log::debug;
use rusqlite::{OptionalExtension, params};

use super::connection::{DatabaseConnection, DatabaseStats};
use super::models::{Genre, Movie, TranslationRecord};
use crate::app_config::Config;

/// Column list shared by every movie projection
const MOVIE_COLUMNS: &str = "m.id, m.title, m.release_date, m.vote_average, m.overview, \
     GROUP_CONCAT(g.genre, ', ') AS genres";

/// Genre joins shared by every movie projection
const GENRE_JOINS: &str = "LEFT JOIN movies_genres AS mg ON m.id = mg.movie_id \
     LEFT JOIN genres AS g ON mg.genre_id = g.genre_id";

/// Maximum number of title search results returned per query
const SEARCH_RESULT_LIMIT: u32 = 10;

/// Maximum number of movies returned for a genre listing
const GENRE_SAMPLE_LIMIT: u32 = 5;

/// Repository for database operations
#[derive(Clone)]
pub struct Repository {
    /// Database connection
    db: DatabaseConnection,
}

impl Repository {
    /// Create a new repository with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a repository with the default database location
    pub fn new_default() -> Result<Self> {
        let db = DatabaseConnection::new_default()?;
        Ok(Self::new(db))
    }

    /// Create a repository with an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        let db = DatabaseConnection::new_in_memory()?;
        Ok(Self::new(db))
    }

    /// Create a repository at the location given in the configuration
    ///
    /// Falls back to the per-user data directory when no path is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        match &config.database.path {
            Some(path) => Ok(Self::new(DatabaseConnection::new(path)?)),
            None => Self::new_default(),
        }
    }

    /// Parse a denormalized movie row
    fn movie_from_row(row: &rusqlite::Row) -> rusqlite::Result<Movie> {
        Ok(Movie {
            id: row.get(0)?,
            title: row.get(1)?,
            release_date: row.get(2)?,
            vote_average: row.get(3)?,
            overview: row.get(4)?,
            // GROUP_CONCAT is NULL when the movie has no genre links
            genres: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
        })
    }

    // =========================================================================
    // Catalog Queries
    // =========================================================================

    /// Pick one movie uniformly at random from the whole catalog
    ///
    /// Returns `None` when the catalog is empty.
    pub async fn random_movie(&self) -> Result<Option<Movie>> {
        self.db
            .execute_async(move |conn| {
                let sql = format!(
                    "SELECT {MOVIE_COLUMNS} FROM movies AS m {GENRE_JOINS} \
                     GROUP BY m.id ORDER BY RANDOM() LIMIT 1"
                );
                let movie = conn
                    .query_row(&sql, [], Self::movie_from_row)
                    .optional()?;
                Ok(movie)
            })
            .await
    }

    /// Case-insensitive substring search against movie titles
    ///
    /// An empty query matches every title. Results are capped and follow
    /// the store's natural order.
    pub async fn search_by_title(&self, query: &str) -> Result<Vec<Movie>> {
        let pattern = format!("%{}%", query.to_lowercase());

        self.db
            .execute_async(move |conn| {
                let sql = format!(
                    "SELECT {MOVIE_COLUMNS} FROM movies AS m {GENRE_JOINS} \
                     WHERE LOWER(m.title) LIKE ?1 \
                     GROUP BY m.id LIMIT {SEARCH_RESULT_LIMIT}"
                );
                let mut stmt = conn.prepare(&sql)?;
                let movies: Vec<Movie> = stmt
                    .query_map([&pattern], Self::movie_from_row)?
                    .filter_map(|r| r.ok())
                    .collect();
                Ok(movies)
            })
            .await
    }

    /// All genres, ordered by name ascending
    pub async fn list_genres(&self) -> Result<Vec<Genre>> {
        self.db
            .execute_async(|conn| {
                let mut stmt =
                    conn.prepare("SELECT genre_id, genre FROM genres ORDER BY genre")?;
                let genres: Vec<Genre> = stmt
                    .query_map([], |row| {
                        Ok(Genre {
                            id: row.get(0)?,
                            name: row.get(1)?,
                        })
                    })?
                    .filter_map(|r| r.ok())
                    .collect();
                Ok(genres)
            })
            .await
    }

    /// A random sample of movies in the given genre
    ///
    /// Returns an empty vec when the genre has no movies or does not exist.
    pub async fn movies_by_genre(&self, genre_id: i64) -> Result<Vec<Movie>> {
        self.db
            .execute_async(move |conn| {
                let sql = format!(
                    "SELECT {MOVIE_COLUMNS} FROM movies AS m \
                     JOIN movies_genres AS mg ON m.id = mg.movie_id \
                     JOIN genres AS g ON mg.genre_id = g.genre_id \
                     WHERE g.genre_id = ?1 \
                     GROUP BY m.id ORDER BY RANDOM() LIMIT {GENRE_SAMPLE_LIMIT}"
                );
                let mut stmt = conn.prepare(&sql)?;
                let movies: Vec<Movie> = stmt
                    .query_map([genre_id], Self::movie_from_row)?
                    .filter_map(|r| r.ok())
                    .collect();
                Ok(movies)
            })
            .await
    }

    /// Look up a single movie by id
    pub async fn movie_by_id(&self, movie_id: i64) -> Result<Option<Movie>> {
        self.db
            .execute_async(move |conn| {
                let sql = format!(
                    "SELECT {MOVIE_COLUMNS} FROM movies AS m {GENRE_JOINS} \
                     WHERE m.id = ?1 GROUP BY m.id"
                );
                let movie = conn
                    .query_row(&sql, [movie_id], Self::movie_from_row)
                    .optional()?;
                Ok(movie)
            })
            .await
    }

    /// Look up a genre name by id
    pub async fn genre_name_by_id(&self, genre_id: i64) -> Result<Option<String>> {
        self.db
            .execute_async(move |conn| {
                let name = conn
                    .query_row(
                        "SELECT genre FROM genres WHERE genre_id = ?1",
                        [genre_id],
                        |row| row.get(0),
                    )
                    .optional()?;
                Ok(name)
            })
            .await
    }

    // =========================================================================
    // Favorites Operations
    // =========================================================================

    /// All movies favorited by the user, ordered by title ascending
    pub async fn favorites_of(&self, user_id: i64) -> Result<Vec<Movie>> {
        self.db
            .execute_async(move |conn| {
                let sql = format!(
                    "SELECT {MOVIE_COLUMNS} FROM user_favorites AS uf \
                     JOIN movies AS m ON uf.movie_id = m.id \
                     {GENRE_JOINS} \
                     WHERE uf.user_id = ?1 \
                     GROUP BY m.id ORDER BY m.title"
                );
                let mut stmt = conn.prepare(&sql)?;
                let movies: Vec<Movie> = stmt
                    .query_map([user_id], Self::movie_from_row)?
                    .filter_map(|r| r.ok())
                    .collect();
                Ok(movies)
            })
            .await
    }

    /// Add a movie to a user's favorites
    ///
    /// Returns true if the row was newly inserted, false if the pair already
    /// existed. The uniqueness constraint resolves the race between
    /// concurrent adds; there is no check-then-act window. Foreign key
    /// violations are not swallowed and surface as errors.
    pub async fn add_favorite(&self, user_id: i64, movie_id: i64) -> Result<bool> {
        self.db
            .execute_async(move |conn| {
                let inserted = conn.execute(
                    "INSERT OR IGNORE INTO user_favorites (user_id, movie_id) VALUES (?1, ?2)",
                    params![user_id, movie_id],
                )?;
                Ok(inserted > 0)
            })
            .await
    }

    /// Remove a movie from a user's favorites
    ///
    /// Returns true if a row was deleted, false if none existed.
    pub async fn remove_favorite(&self, user_id: i64, movie_id: i64) -> Result<bool> {
        self.db
            .execute_async(move |conn| {
                let deleted = conn.execute(
                    "DELETE FROM user_favorites WHERE user_id = ?1 AND movie_id = ?2",
                    params![user_id, movie_id],
                )?;
                Ok(deleted > 0)
            })
            .await
    }

    /// Check whether a movie is in a user's favorites
    pub async fn is_favorite(&self, user_id: i64, movie_id: i64) -> Result<bool> {
        self.db
            .execute_async(move |conn| {
                let row: Option<i64> = conn
                    .query_row(
                        "SELECT 1 FROM user_favorites WHERE user_id = ?1 AND movie_id = ?2",
                        params![user_id, movie_id],
                        |row| row.get(0),
                    )
                    .optional()?;
                Ok(row.is_some())
            })
            .await
    }

    // =========================================================================
    // Translation Cache Operations
    // =========================================================================

    /// Get a cached translation by its exact-match key
    pub async fn cached_translation(&self, key: &str) -> Result<Option<String>> {
        let key = key.to_string();

        self.db
            .execute_async(move |conn| {
                let cached: Option<String> = conn
                    .query_row(
                        "SELECT translated_text FROM translations_cache WHERE original_text_key = ?1",
                        [&key],
                        |row| row.get(0),
                    )
                    .optional()?;

                if cached.is_some() {
                    debug!("Translation cache hit");
                }
                Ok(cached)
            })
            .await
    }

    /// Store a translation in the cache, replacing any existing value
    pub async fn store_translation(&self, record: &TranslationRecord) -> Result<()> {
        let record = record.clone();

        self.db
            .execute_async(move |conn| {
                conn.execute(
                    r#"
                    INSERT INTO translations_cache (original_text_key, translated_text, created_at)
                    VALUES (?1, ?2, ?3)
                    ON CONFLICT(original_text_key) DO UPDATE SET
                        translated_text = excluded.translated_text,
                        created_at = excluded.created_at
                    "#,
                    params![record.key, record.translated_text, record.created_at],
                )?;
                Ok(())
            })
            .await
    }

    // =========================================================================
    // Maintenance
    // =========================================================================

    /// Get row counts and file size for the underlying database
    pub fn stats(&self) -> Result<DatabaseStats> {
        self.db.stats()
    }
}
