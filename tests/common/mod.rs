/*!
 * Common test utilities for the kinobot test suite.
 *
 * The movies/genres catalog tables are owned by an external loading process
 * in production, so the library schema never creates them; tests build and
 * seed them here through the public connection API.
 */

use kinobot::{DatabaseConnection, Repository};

/// Create an in-memory database with empty catalog tables
pub fn catalog_connection() -> DatabaseConnection {
    let db = DatabaseConnection::new_in_memory().expect("Failed to create in-memory database");

    db.execute(|conn| {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS movies (
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL,
                release_date TEXT,
                vote_average REAL NOT NULL,
                overview TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS genres (
                genre_id INTEGER PRIMARY KEY,
                genre TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS movies_genres (
                movie_id INTEGER NOT NULL REFERENCES movies(id),
                genre_id INTEGER NOT NULL REFERENCES genres(genre_id),
                PRIMARY KEY (movie_id, genre_id)
            );
            "#,
        )?;
        Ok(())
    })
    .expect("Failed to create catalog tables");

    db
}

/// Create a repository over an in-memory database with empty catalog tables
pub fn catalog_repository() -> (DatabaseConnection, Repository) {
    let db = catalog_connection();
    let repo = Repository::new(db.clone());
    (db, repo)
}

/// Insert a movie row
pub fn insert_movie(
    db: &DatabaseConnection,
    id: i64,
    title: &str,
    release_date: Option<&str>,
    vote_average: f64,
    overview: &str,
) {
    let title = title.to_string();
    let release_date = release_date.map(str::to_string);
    let overview = overview.to_string();

    db.execute(move |conn| {
        conn.execute(
            "INSERT INTO movies (id, title, release_date, vote_average, overview)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            (id, title, release_date, vote_average, overview),
        )?;
        Ok(())
    })
    .expect("Failed to insert movie");
}

/// Insert a genre row
pub fn insert_genre(db: &DatabaseConnection, genre_id: i64, genre: &str) {
    let genre = genre.to_string();
    db.execute(move |conn| {
        conn.execute(
            "INSERT INTO genres (genre_id, genre) VALUES (?1, ?2)",
            (genre_id, genre),
        )?;
        Ok(())
    })
    .expect("Failed to insert genre");
}

/// Link a movie to a genre
pub fn link_movie_genre(db: &DatabaseConnection, movie_id: i64, genre_id: i64) {
    db.execute(move |conn| {
        conn.execute(
            "INSERT INTO movies_genres (movie_id, genre_id) VALUES (?1, ?2)",
            (movie_id, genre_id),
        )?;
        Ok(())
    })
    .expect("Failed to link movie to genre");
}
