use crate::db::Database;
use crate::error::Result;
use rusqlite::{params, OptionalExtension};

const ACCESS_TOKEN_KEY: &str = "access_token";

// Settings Queries

impl Database {
    pub fn get_setting(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO settings (key, value, updated_at)
            VALUES (?1, ?2, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key, value],
        )?;
        Ok(())
    }

    /// Returns true if a value was removed
    pub fn delete_setting(&self, key: &str) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM settings WHERE key = ?1", [key])?;
        Ok(removed > 0)
    }
}

// Access Token

impl Database {
    pub fn access_token(&self) -> Result<Option<String>> {
        Ok(self
            .get_setting(ACCESS_TOKEN_KEY)?
            .filter(|token| !token.is_empty()))
    }

    pub fn store_access_token(&self, token: &str) -> Result<()> {
        self.set_setting(ACCESS_TOKEN_KEY, token)?;
        tracing::debug!("Access token stored");
        Ok(())
    }

    pub fn clear_access_token(&self) -> Result<bool> {
        self.delete_setting(ACCESS_TOKEN_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "agriadvice-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn settings_round_trip() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.get_setting("missing").unwrap(), None);

        db.set_setting("units", "metric").unwrap();
        db.set_setting("units", "imperial").unwrap();
        assert_eq!(db.get_setting("units").unwrap().as_deref(), Some("imperial"));

        assert!(db.delete_setting("units").unwrap());
        assert!(!db.delete_setting("units").unwrap());
    }

    #[test]
    fn access_token_lifecycle() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.access_token().unwrap().is_none());

        db.store_access_token("eyJhbGciOi.token").unwrap();
        assert_eq!(
            db.access_token().unwrap().as_deref(),
            Some("eyJhbGciOi.token")
        );

        assert!(db.clear_access_token().unwrap());
        assert!(!db.clear_access_token().unwrap());
        assert!(db.access_token().unwrap().is_none());
    }

    #[test]
    fn empty_token_counts_as_missing() {
        let db = Database::open_in_memory().unwrap();
        db.store_access_token("").unwrap();
        assert!(db.access_token().unwrap().is_none());
    }

    #[test]
    fn token_survives_reopen() {
        let dir = scratch_dir("token");

        {
            let db = Database::open(Some(&dir)).unwrap();
            assert_eq!(db.path(), dir.join("agriadvice.db"));
            db.store_access_token("persisted").unwrap();
        }

        let db = Database::open(Some(&dir)).unwrap();
        assert_eq!(db.access_token().unwrap().as_deref(), Some("persisted"));

        drop(db);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
