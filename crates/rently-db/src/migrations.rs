use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS owners (
            id          TEXT PRIMARY KEY,
            phone       TEXT NOT NULL UNIQUE,
            password    TEXT NOT NULL,
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS renters (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            phone       TEXT NOT NULL UNIQUE,
            password    TEXT NOT NULL,
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS properties (
            id              TEXT PRIMARY KEY,
            type            TEXT NOT NULL,
            owner_name      TEXT NOT NULL DEFAULT '',
            mobile          TEXT NOT NULL DEFAULT '',
            location        TEXT NOT NULL DEFAULT '',
            price           REAL,
            rent            REAL,
            description     TEXT NOT NULL DEFAULT '',
            floor           TEXT NOT NULL DEFAULT '',
            kitchen         TEXT NOT NULL DEFAULT '',
            bedroom         TEXT NOT NULL DEFAULT '',
            hall            TEXT NOT NULL DEFAULT '',
            garden          TEXT NOT NULL DEFAULT '',
            water_supply    TEXT NOT NULL DEFAULT '',
            image_urls      TEXT NOT NULL DEFAULT '[]',
            map_link        TEXT NOT NULL DEFAULT '',
            date            TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_properties_type_date
            ON properties(type, date);
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
