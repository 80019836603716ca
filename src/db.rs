use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Binding on-disk contract: three tables, text dates/times, a uniqueness
/// constraint on one attendance row per staff member per day.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS school_config (
        id   TEXT PRIMARY KEY,
        name TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS staff (
        id          TEXT PRIMARY KEY,
        name        TEXT NOT NULL,
        dept        TEXT NOT NULL,
        is_approved INTEGER NOT NULL DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS attendance (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        school_id   TEXT NOT NULL,
        school_name TEXT NOT NULL,
        staff_id    TEXT NOT NULL,
        date        TEXT NOT NULL,
        clock_in    TEXT,
        clock_out   TEXT,
        UNIQUE(staff_id, date)
    )",
];

pub async fn init_db(database_url: &str) -> SqlitePool {
    let options = SqliteConnectOptions::from_str(database_url)
        .expect("Invalid DATABASE_URL")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .expect("Failed to connect to database");

    init_schema(&pool).await.expect("Failed to apply schema");

    pool
}

pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for ddl in SCHEMA {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
