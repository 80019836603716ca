use sqlx::SqliteExecutor;

use crate::model::SchoolInfo;

pub(crate) async fn fetch(ex: impl SqliteExecutor<'_>) -> Result<Option<SchoolInfo>, sqlx::Error> {
    sqlx::query_as::<_, SchoolInfo>("SELECT id, name FROM school_config")
        .fetch_optional(ex)
        .await
}

pub(crate) async fn clear(ex: impl SqliteExecutor<'_>) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM school_config").execute(ex).await?;
    Ok(())
}

pub(crate) async fn insert(
    ex: impl SqliteExecutor<'_>,
    id: &str,
    name: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO school_config (id, name) VALUES (?, ?)")
        .bind(id)
        .bind(name)
        .execute(ex)
        .await?;
    Ok(())
}
