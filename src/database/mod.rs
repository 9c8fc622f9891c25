/*!
 * Database module for persistent storage.
 *
 * This module provides SQLite-based persistence for:
 * - Per-user movie favorites
 * - The translation cache shielding the remote translate endpoint
 * - Read access to the externally loaded movie/genre catalog
 */

pub mod connection;
pub mod models;
pub mod repository;
pub mod schema;

// Re-export main types
pub use connection::DatabaseConnection;
pub use repository::Repository;
