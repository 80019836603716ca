use dotenvy::dotenv;
use tracing::info;
use tracing_appender::rolling;

use attendance_node::shell::{ScreenId, Shell};
use attendance_node::{db, Config, Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .init();

    info!("Attendance station starting...");

    let pool = db::init_db(&config.database_url).await;
    let store = Store::new(pool);

    // An unregistered station is forced through setup before anything else.
    let start = if store.school().await?.is_none() {
        ScreenId::Settings
    } else {
        ScreenId::Dashboard
    };

    Shell::new(store, config, start).run().await
}
