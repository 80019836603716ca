use dotenvy::dotenv;
use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Super-admin sync endpoint. Referenced by the sync stub only; no
    /// request is ever sent to it.
    pub sync_url: String,
    pub export_dir: String,
    pub history_limit: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://local_school.db".to_string()),
            sync_url: env::var("SYNC_URL")
                .unwrap_or_else(|_| "https://your-super-admin-web.com/api/sync/".to_string()),
            export_dir: env::var("EXPORT_DIR").unwrap_or_else(|_| ".".to_string()),
            history_limit: env::var("HISTORY_LIMIT")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .unwrap_or(100),
        }
    }
}
