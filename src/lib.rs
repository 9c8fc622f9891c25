/*!
 * # kinobot - movie catalog core for a chat bot
 *
 * A Rust library implementing the data core of a conversational movie
 * browser: catalog queries, per-user favorites, and a persistent
 * translation cache.
 *
 * ## Features
 *
 * - Random movie picks, title search, and genre browsing over SQLite
 * - Per-user favorites with race-free add/remove semantics
 * - Read-through translation cache in front of a LibreTranslate endpoint,
 *   with permanent negative caching of failed lookups
 * - Typed records with a denormalized genre string for display
 *
 * The chat transport (command routing, keyboards, message editing) lives
 * outside this crate and calls into it.
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `database`: SQLite persistence:
 *   - `database::connection`: Connection handling and async access
 *   - `database::schema`: Idempotent schema creation
 *   - `database::models`: Typed row records
 *   - `database::repository`: Catalog queries, favorites, cache table
 * - `translation`: Cached translation service
 * - `providers`: Clients for the remote translation capability:
 *   - `providers::libretranslate`: LibreTranslate API client
 *   - `providers::mock`: Call-counting test double
 * - `errors`: Custom error types for the library
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod database;
pub mod errors;
pub mod providers;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use database::models::{Genre, Movie, TranslationRecord};
pub use database::{DatabaseConnection, Repository};
pub use errors::{AppError, ProviderError};
pub use providers::Provider;
pub use translation::TranslationService;
