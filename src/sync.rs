use serde_json::json;
use tracing::info;

use crate::error::{AppError, Result};
use crate::store::Store;

/// Builds the body that a real sync would POST: the station identity plus
/// how many attendance rows it holds. Kept separate so the preview can be
/// inspected without touching the (nonexistent) network path.
pub async fn sync_payload(store: &Store) -> Result<serde_json::Value> {
    let school = store.school().await?.ok_or(AppError::Unconfigured)?;
    let records = store.all_attendance().await?;

    Ok(json!({
        "school_id": school.id,
        "school_name": school.name,
        "attendance_rows": records.len(),
    }))
}

/// Cloud sync to the super-admin endpoint. The endpoint is not live and no
/// protocol has been agreed, so this sends nothing: it logs the payload it
/// would send and confirms to the operator.
pub async fn sync_to_cloud(store: &Store, sync_url: &str) -> Result<String> {
    let payload = sync_payload(store).await?;

    // TODO: POST the payload once the super-admin server exists.
    info!(url = sync_url, payload = %payload, "Cloud sync requested (stub, nothing sent)");

    let school_name = payload["school_name"].as_str().unwrap_or_default().to_string();
    Ok(format!("Syncing {school_name} data to Super Admin..."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db, engine, roster};
    use chrono::{NaiveDate, NaiveTime};
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
    async fn sync_requires_registration() {
        let store = test_store().await;

        let err = sync_to_cloud(&store, "https://example.invalid/api/sync/")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unconfigured));

        store.register_school("SCH-1", "Nexus High").await.unwrap();
        let msg = sync_to_cloud(&store, "https://example.invalid/api/sync/")
            .await
            .unwrap();
        assert!(msg.contains("Nexus High"));
    }

    #[tokio::test]
    async fn payload_previews_station_identity_and_row_count() {
        let store = test_store().await;
        store.register_school("SCH-1", "Nexus High").await.unwrap();
        roster::import_roster(&store, "id,name,dept,is_approved\nS1,Alice,Math,1\n".as_bytes())
            .await
            .unwrap();
        engine::submit(
            &store,
            "S1",
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        )
        .await
        .unwrap();

        let payload = sync_payload(&store).await.unwrap();
        assert_eq!(payload["school_id"], "SCH-1");
        assert_eq!(payload["school_name"], "Nexus High");
        assert_eq!(payload["attendance_rows"], 1);
    }
}
