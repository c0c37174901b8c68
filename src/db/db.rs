use super::migrations::init_with_migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "streaks.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database in the platform data directory, applying pending migrations.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open(db_file_path)
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db> {
        let mut conn = Connection::open(path)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    pub fn in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    pub fn new_without_migrations<P: AsRef<Path>>(path: P) -> Result<Connection> {
        Ok(Connection::open(path)?)
    }
}
