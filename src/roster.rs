use std::io::Read;

use tracing::{info, warn};

use crate::error::{AppError, Result};
use crate::model::StaffRow;
use crate::store::{staff, Store};

/// Bulk-loads a roster CSV into the staff table. All-or-nothing: every
/// record is parsed up front and the inserts share one transaction, so a
/// malformed row or a colliding id leaves the table exactly as it was.
///
/// Imported members start unapproved unless the file says otherwise; they
/// cannot clock in until the admin approves them.
pub async fn import_roster<R: Read>(store: &Store, reader: R) -> Result<usize> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut rows: Vec<StaffRow> = Vec::new();
    for record in csv_reader.deserialize() {
        let row: StaffRow = record.map_err(|e| AppError::Parse(e.to_string()))?;
        rows.push(row);
    }

    let mut tx = store.begin().await?;
    for row in &rows {
        match staff::insert(&mut *tx, row).await {
            Ok(()) => {}
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                warn!(staff_id = %row.id, "Roster import aborted on duplicate id");
                return Err(AppError::Parse(format!(
                    "duplicate staff id '{}'; no rows were imported",
                    row.id
                )));
            }
            Err(e) => return Err(e.into()),
        }
    }
    tx.commit().await?;

    info!(count = rows.len(), "Roster imported");
    Ok(rows.len())
}

/// Flips a member's approval flag on. Approving an already-approved member
/// is a harmless no-op; an unknown id is reported as not found rather than
/// silently ignored.
pub async fn approve(store: &Store, staff_id: &str) -> Result<()> {
    let mut tx = store.begin().await?;
    let touched = staff::approve(&mut *tx, staff_id).await?;
    if touched == 0 {
        return Err(AppError::NotFound(format!("staff id '{staff_id}'")));
    }
    tx.commit().await?;

    info!(staff_id, "Staff member approved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_store() -> Store {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        db::init_schema(&pool).await.unwrap();
        Store::new(pool)
    }

    #[tokio::test]
    async fn import_appends_rows_with_pending_default() {
        let store = test_store().await;
        let csv = "id,name,dept\nS1,Alice,Math\nS2,Bob,Science\n";

        let count = import_roster(&store, csv.as_bytes()).await.unwrap();
        assert_eq!(count, 2);

        let list = store.staff_list().await.unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.iter().all(|m| !m.is_approved));
        assert_eq!(list[0].name, "Alice");
        assert_eq!(list[1].dept, "Science");
    }

    #[tokio::test]
    async fn import_honors_approval_column() {
        let store = test_store().await;
        let csv = "id,name,dept,is_approved\nS1,Alice,Math,1\nS2,Bob,Science,0\n";

        import_roster(&store, csv.as_bytes()).await.unwrap();

        let alice = store.find_staff("S1").await.unwrap().unwrap();
        let bob = store.find_staff("S2").await.unwrap().unwrap();
        assert!(alice.is_approved);
        assert!(!bob.is_approved);
    }

    #[tokio::test]
    async fn malformed_row_aborts_whole_import() {
        let store = test_store().await;
        // Second record is missing the dept column.
        let csv = "id,name,dept\nS1,Alice,Math\nS2,Bob\n";

        let err = import_roster(&store, csv.as_bytes()).await.unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
        assert!(store.staff_list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_id_aborts_whole_import() {
        let store = test_store().await;
        import_roster(&store, "id,name,dept\nS1,Alice,Math\n".as_bytes())
            .await
            .unwrap();

        let csv = "id,name,dept\nS9,New,Arts\nS1,Clone,Math\n";
        let err = import_roster(&store, csv.as_bytes()).await.unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));

        // The colliding batch was rolled back entirely, S9 included.
        let list = store.staff_list().await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, "S1");
        assert_eq!(list[0].name, "Alice");
    }

    #[tokio::test]
    async fn approval_is_idempotent() {
        let store = test_store().await;
        import_roster(&store, "id,name,dept\nS1,Alice,Math\n".as_bytes())
            .await
            .unwrap();

        approve(&store, "S1").await.unwrap();
        approve(&store, "S1").await.unwrap();

        let alice = store.find_staff("S1").await.unwrap().unwrap();
        assert!(alice.is_approved);
    }

    #[tokio::test]
    async fn approving_unknown_id_is_not_found() {
        let store = test_store().await;
        let err = approve(&store, "ghost").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
