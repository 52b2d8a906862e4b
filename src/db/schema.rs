// Movies table row mapping and CRUD query helpers

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::{Result, VaultError};
use crate::movie::Movie;

fn movie_from_row(row: &Row) -> rusqlite::Result<Movie> {
    Ok(Movie {
        id: row.get(0)?,
        title: row.get(1)?,
        year: row.get(2)?,
        director: row.get(3)?,
        rating: row.get(4)?,
        runtime_minutes: row.get(5)?,
        votes: row.get(6)?,
        watched: row.get(7)?,
    })
}

/// Insert a movie and return the assigned id.
///
/// Callers must run `Movie::validate` first; invalid field combinations
/// must never reach storage. The record's own id is ignored — the
/// database assigns the identity.
pub fn insert_movie(conn: &Connection, movie: &Movie) -> Result<i64> {
    conn.execute(
        "INSERT INTO movies (title, year, director, rating, runtimeMinutes, votes, watched)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            movie.title,
            movie.year,
            movie.director,
            movie.rating,
            movie.runtime_minutes,
            movie.votes,
            movie.watched,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Fetch a movie by id. Absence is a normal outcome, not an error.
pub fn get_movie(conn: &Connection, id: i64) -> Result<Option<Movie>> {
    let result = conn
        .query_row(
            "SELECT id, title, year, director, rating, runtimeMinutes, votes, watched
             FROM movies WHERE id = ?1",
            params![id],
            movie_from_row,
        )
        .optional()?;
    Ok(result)
}

/// All movies ordered by id. Empty vec if the catalog is empty.
pub fn list_movies(conn: &Connection) -> Result<Vec<Movie>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, year, director, rating, runtimeMinutes, votes, watched
         FROM movies ORDER BY id",
    )?;

    let movies = stmt
        .query_map([], movie_from_row)?
        .collect::<rusqlite::Result<Vec<Movie>>>()?;

    Ok(movies)
}

/// Overwrite every stored field of an existing row in one statement.
/// Fails with `MovieNotFound` if the id does not reference a row.
pub fn update_movie(conn: &Connection, movie: &Movie) -> Result<()> {
    let changed = conn.execute(
        "UPDATE movies
         SET title = ?1, year = ?2, director = ?3, rating = ?4,
             runtimeMinutes = ?5, votes = ?6, watched = ?7
         WHERE id = ?8",
        params![
            movie.title,
            movie.year,
            movie.director,
            movie.rating,
            movie.runtime_minutes,
            movie.votes,
            movie.watched,
            movie.id,
        ],
    )?;

    if changed == 0 {
        return Err(VaultError::MovieNotFound(movie.id));
    }
    Ok(())
}

/// Remove a row permanently. Fails with `MovieNotFound` if absent, so
/// repeating a delete fails the second time.
pub fn delete_movie(conn: &Connection, id: i64) -> Result<()> {
    let changed = conn.execute("DELETE FROM movies WHERE id = ?1", params![id])?;

    if changed == 0 {
        return Err(VaultError::MovieNotFound(id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_test_db() -> (tempfile::TempDir, Connection) {
        let dir = tempfile::tempdir().unwrap();
        let conn = crate::db::open_db(&dir.path().join("movievault.db")).unwrap();
        (dir, conn)
    }

    fn inception() -> Movie {
        Movie::new(
            "Inception",
            2010,
            "Christopher Nolan",
            8.8,
            148,
            2_200_000,
            true,
        )
    }

    #[test]
    fn test_empty_catalog_lists_nothing() {
        let (_dir, conn) = open_test_db();
        assert!(list_movies(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_insert_get_round_trip() {
        let (_dir, conn) = open_test_db();

        let movie = inception();
        movie.validate().unwrap();

        let id = insert_movie(&conn, &movie).unwrap();
        assert!(id > 0);

        let fetched = get_movie(&conn, id).unwrap().expect("row should exist");

        let mut expected = movie.clone();
        expected.id = id;
        assert_eq!(fetched, expected);
    }

    #[test]
    fn test_insert_assigns_fresh_ids() {
        let (_dir, conn) = open_test_db();

        let first = insert_movie(&conn, &inception()).unwrap();
        let second = insert_movie(&conn, &inception()).unwrap();
        assert_ne!(first, second);

        assert_eq!(list_movies(&conn).unwrap().len(), 2);
    }

    #[test]
    fn test_get_missing_id_is_none() {
        let (_dir, conn) = open_test_db();
        assert!(get_movie(&conn, 42).unwrap().is_none());
    }

    #[test]
    fn test_update_overwrites_all_fields() {
        let (_dir, conn) = open_test_db();

        let id = insert_movie(&conn, &inception()).unwrap();

        let mut edited = Movie::new("The Shining", 1980, "Stanley Kubrick", 8.4, 146, 1_100_000, false);
        edited.id = id;
        update_movie(&conn, &edited).unwrap();

        let fetched = get_movie(&conn, id).unwrap().unwrap();
        assert_eq!(fetched, edited);
    }

    #[test]
    fn test_update_missing_id_fails_and_changes_nothing() {
        let (_dir, conn) = open_test_db();

        let id = insert_movie(&conn, &inception()).unwrap();

        let mut phantom = inception();
        phantom.id = id + 1000;
        phantom.title = "Phantom".to_string();

        match update_movie(&conn, &phantom) {
            Err(VaultError::MovieNotFound(missing)) => assert_eq!(missing, phantom.id),
            other => panic!("expected MovieNotFound, got {:?}", other),
        }

        let rows = list_movies(&conn).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Inception");
    }

    #[test]
    fn test_delete_then_get_is_none() {
        let (_dir, conn) = open_test_db();

        let id = insert_movie(&conn, &inception()).unwrap();
        delete_movie(&conn, id).unwrap();

        assert!(get_movie(&conn, id).unwrap().is_none());
    }

    #[test]
    fn test_delete_is_not_idempotent() {
        let (_dir, conn) = open_test_db();

        let id = insert_movie(&conn, &inception()).unwrap();
        delete_movie(&conn, id).unwrap();

        match delete_movie(&conn, id) {
            Err(VaultError::MovieNotFound(missing)) => assert_eq!(missing, id),
            other => panic!("expected MovieNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_persisted_rows_share_identity() {
        let (_dir, conn) = open_test_db();

        let id = insert_movie(&conn, &inception()).unwrap();

        let a = get_movie(&conn, id).unwrap().unwrap();
        let mut b = a.clone();
        b.rating = 9.9;
        assert!(a.same_record(&b));
    }
}
