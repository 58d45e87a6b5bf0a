use crate::config::Config;
use crate::error::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Settings store for a single CLI invocation
pub struct Database {
    pub(super) conn: Connection,
    path: PathBuf,
}

impl Database {
    pub fn open(data_dir_override: Option<&PathBuf>) -> Result<Self> {
        let path = Config::db_path(data_dir_override)?;
        let mut conn = Connection::open(&path)?;
        tracing::debug!("Opened database at {}", path.display());

        super::migrations::run(&mut conn)?;

        Ok(Self { conn, path })
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        super::migrations::run(&mut conn)?;

        Ok(Self {
            conn,
            path: PathBuf::from(":memory:"),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
