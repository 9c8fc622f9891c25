/*!
 * Translation with persistent caching.
 *
 * This module wraps the remote translate capability behind a read-through
 * cache persisted in SQLite, so already-seen strings never trigger a second
 * network round-trip.
 */

pub mod service;

// Re-export main types
pub use service::TranslationService;
