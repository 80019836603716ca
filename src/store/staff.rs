use sqlx::SqliteExecutor;

use crate::model::{StaffMember, StaffRow};

pub(crate) async fn find(
    ex: impl SqliteExecutor<'_>,
    staff_id: &str,
) -> Result<Option<StaffMember>, sqlx::Error> {
    sqlx::query_as::<_, StaffMember>("SELECT id, name, dept, is_approved FROM staff WHERE id = ?")
        .bind(staff_id)
        .fetch_optional(ex)
        .await
}

pub(crate) async fn list(ex: impl SqliteExecutor<'_>) -> Result<Vec<StaffMember>, sqlx::Error> {
    sqlx::query_as::<_, StaffMember>("SELECT id, name, dept, is_approved FROM staff ORDER BY id")
        .fetch_all(ex)
        .await
}

/// Plain append. A primary-key collision surfaces as a database error and
/// is decided by the caller (the importer aborts the whole batch on it).
pub(crate) async fn insert(
    ex: impl SqliteExecutor<'_>,
    row: &StaffRow,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO staff (id, name, dept, is_approved) VALUES (?, ?, ?, ?)")
        .bind(&row.id)
        .bind(&row.name)
        .bind(&row.dept)
        .bind(row.is_approved)
        .execute(ex)
        .await?;
    Ok(())
}

/// Returns the number of rows touched; zero means the id does not exist.
/// Setting the flag on an already-approved member still counts as touched,
/// which is what makes approval idempotent for the caller.
pub(crate) async fn approve(
    ex: impl SqliteExecutor<'_>,
    staff_id: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE staff SET is_approved = 1 WHERE id = ?")
        .bind(staff_id)
        .execute(ex)
        .await?;
    Ok(result.rows_affected())
}
