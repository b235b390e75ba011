mod queries;

use std::fs;
use std::path::PathBuf;

use fotobox_application::{ApplicationError, KeyValueStore};
use rusqlite::Connection;

/// Flat key-value store over a single SQLite table: one row per collection
/// name, the value a JSON string list.
#[derive(Debug, Clone)]
pub struct SqliteKeyValueStore {
    path: PathBuf,
}

impl SqliteKeyValueStore {
    pub fn new(path: String) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }

    fn open_connection(&self) -> Result<Connection, ApplicationError> {
        Connection::open(&self.path)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn initialize(&self) -> Result<(), ApplicationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "index store path must not be empty".to_string(),
            ));
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|error| ApplicationError::Io(error.to_string()))?;
            }
        }

        let conn = self.open_connection()?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        conn.execute_batch(queries::SCHEMA)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;

        Ok(())
    }

    fn get_list(&self, key: &str) -> Result<Option<Vec<String>>, ApplicationError> {
        let conn = self.open_connection()?;
        let found = queries::find_list(&conn, key)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        found
            .map(|entries_json| {
                serde_json::from_str::<Vec<String>>(&entries_json)
                    .map_err(|error| ApplicationError::Persistence(error.to_string()))
            })
            .transpose()
    }

    fn set_list(&self, key: &str, values: &[String]) -> Result<(), ApplicationError> {
        let entries_json = serde_json::to_string(values)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        let conn = self.open_connection()?;
        queries::upsert_list(&conn, key, &entries_json)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), ApplicationError> {
        let conn = self.open_connection()?;
        queries::delete_list(&conn, key)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SqliteKeyValueStore {
        let path = dir.path().join("indices.sqlite3");
        let store = SqliteKeyValueStore::new(path.to_string_lossy().to_string());
        store.initialize().expect("initialize");
        store
    }

    #[test]
    fn initialize_creates_schema() {
        let dir = TempDir::new().expect("tempdir");
        let store = store_in(&dir);
        drop(store);

        let conn = Connection::open(dir.path().join("indices.sqlite3")).expect("open");
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='collections'",
                [],
                |row| row.get(0),
            )
            .expect("query");
        assert_eq!(count, 1);
    }

    #[test]
    fn set_then_get_round_trips_order() {
        let dir = TempDir::new().expect("tempdir");
        let store = store_in(&dir);

        let values = vec!["b".to_string(), "a".to_string(), "a".to_string()];
        store.set_list("recent", &values).expect("set");
        assert_eq!(store.get_list("recent").expect("get"), Some(values));
    }

    #[test]
    fn absent_key_reads_as_none() {
        let dir = TempDir::new().expect("tempdir");
        let store = store_in(&dir);
        assert_eq!(store.get_list("trashed").expect("get"), None);
    }

    #[test]
    fn set_replaces_the_whole_list() {
        let dir = TempDir::new().expect("tempdir");
        let store = store_in(&dir);

        store
            .set_list("cloud", &["one".to_string(), "two".to_string()])
            .expect("set");
        store.set_list("cloud", &["three".to_string()]).expect("set");
        assert_eq!(
            store.get_list("cloud").expect("get"),
            Some(vec!["three".to_string()])
        );
    }

    #[test]
    fn remove_drops_the_key() {
        let dir = TempDir::new().expect("tempdir");
        let store = store_in(&dir);

        store.set_list("cloud", &["one".to_string()]).expect("set");
        store.remove("cloud").expect("remove");
        assert_eq!(store.get_list("cloud").expect("get"), None);
    }
}
