/*!
 * Database schema definitions.
 *
 * This module contains the SQL schema for the tables owned by this library:
 * the per-user favorites and the persistent translation cache. The catalog
 * tables (movies, genres, movies_genres) are populated by an external data
 * loading process and are not created here.
 */

use anyhow::Result;
use log::debug;
use rusqlite::Connection;

/// Initialize the database schema
///
/// Safe to call on every startup: all statements use "create if not exists"
/// semantics and never drop or rewrite existing data.
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    // Enable WAL mode for better concurrency and crash recovery
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;

    // Enable foreign keys
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;

    // Create user favorites table
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS user_favorites (
            user_id INTEGER NOT NULL,
            movie_id INTEGER NOT NULL,
            PRIMARY KEY (user_id, movie_id),
            FOREIGN KEY (movie_id) REFERENCES movies(id)
        );

        CREATE INDEX IF NOT EXISTS idx_user_favorites_user ON user_favorites(user_id);
        "#,
    )?;

    // Create translations cache table
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS translations_cache (
            original_text_key TEXT PRIMARY KEY,
            translated_text TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
    )?;

    debug!("Database schema is ready");
    Ok(())
}
