// Database module

pub mod migrations;
pub mod schema;

use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

use crate::constants::{DB_FILENAME, MOVIEVAULT_FOLDER};

/// Open or create a catalog database at the given path.
///
/// Creates the parent directory if missing, sets pragmas, and runs any
/// pending migrations. Call once at startup; the connection is held for
/// the process lifetime.
pub fn open_db(db_path: &Path) -> Result<Connection> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Cannot create catalog directory {}: {}. Check directory permissions.",
                parent.display(),
                e
            )
        })?;
    }

    let conn = Connection::open(db_path)?;

    // Pragmas must be set per connection
    conn.execute_batch("PRAGMA journal_mode = WAL;")?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.execute_batch("PRAGMA busy_timeout = 5000;")?;

    migrations::run_migrations(&conn)?;

    Ok(conn)
}

/// Default catalog path: ~/.movievault/movievault.db
pub fn default_db_path() -> Result<PathBuf> {
    let home = directories::BaseDirs::new()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
    Ok(home.home_dir().join(MOVIEVAULT_FOLDER).join(DB_FILENAME))
}
