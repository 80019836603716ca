use std::path::Path;

use chrono::Local;
use rust_xlsxwriter::{Workbook, XlsxError};
use tracing::{error, info};

use crate::error::{AppError, Result};
use crate::model::AttendanceRecord;
use crate::store::Store;

// One sheet mirroring the attendance table's columns verbatim.
const COLUMNS: [&str; 7] = [
    "id",
    "school_id",
    "school_name",
    "staff_id",
    "date",
    "clock_in",
    "clock_out",
];

/// Default report name, e.g. `Report_2024-01-10_0930.xlsx`.
pub fn suggested_filename() -> String {
    format!("Report_{}.xlsx", Local::now().format("%Y-%m-%d_%H%M"))
}

/// Dumps the whole attendance table, in storage order, to a spreadsheet at
/// `path`. Returns the number of data rows written. A locked or unwritable
/// destination is a recoverable `Write` error, not a crash; the caller
/// tells the user to close the file and retry.
pub async fn export_attendance(store: &Store, path: &Path) -> Result<usize> {
    let records = store.all_attendance().await?;

    write_workbook(&records, path).map_err(|e| {
        error!(error = %e, path = %path.display(), "Report export failed");
        AppError::Write(e.to_string())
    })?;

    info!(rows = records.len(), path = %path.display(), "Report exported");
    Ok(records.len())
}

fn write_workbook(records: &[AttendanceRecord], path: &Path) -> std::result::Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, header) in COLUMNS.iter().enumerate() {
        sheet.write(0, col as u16, *header)?;
    }

    for (i, rec) in records.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write(row, 0, rec.id)?;
        sheet.write(row, 1, rec.school_id.as_str())?;
        sheet.write(row, 2, rec.school_name.as_str())?;
        sheet.write(row, 3, rec.staff_id.as_str())?;
        sheet.write(row, 4, rec.date.format("%Y-%m-%d").to_string())?;
        sheet.write(row, 5, time_cell(rec.clock_in))?;
        sheet.write(row, 6, time_cell(rec.clock_out))?;
    }

    workbook.save(path)
}

fn time_cell(time: Option<chrono::NaiveTime>) -> String {
    time.map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db, engine, roster, store::Store};
    use calamine::{open_workbook, Data, Reader, Xlsx};
    use chrono::{NaiveDate, NaiveTime};
    use sqlx::sqlite::SqlitePoolOptions;

    async fn seeded_store() -> Store {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        db::init_schema(&pool).await.unwrap();
        let store = Store::new(pool);

        store.register_school("SCH-1", "Nexus High").await.unwrap();
        roster::import_roster(
            &store,
            "id,name,dept,is_approved\nS1,Alice,Math,1\nS2,Bob,Science,1\n".as_bytes(),
        )
        .await
        .unwrap();

        let day = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let five = NaiveTime::from_hms_opt(17, 30, 0).unwrap();
        engine::submit(&store, "S1", day, nine).await.unwrap();
        engine::submit(&store, "S1", day, five).await.unwrap();
        engine::submit(&store, "S2", day, nine).await.unwrap();

        store
    }

    #[tokio::test]
    async fn export_round_trips_rows_and_columns() {
        let store = seeded_store().await;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Report_test.xlsx");

        let written = export_attendance(&store, &path).await.unwrap();
        assert_eq!(written, 2);

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        let range = workbook.worksheet_range("Sheet1").unwrap();

        let rows: Vec<Vec<Data>> = range.rows().map(|r| r.to_vec()).collect();
        assert_eq!(rows.len(), 3); // header + two records

        let headers: Vec<String> = rows[0].iter().map(|c| c.to_string()).collect();
        assert_eq!(headers, COLUMNS);

        // First record: S1 complete day.
        assert_eq!(rows[1][3], Data::String("S1".into()));
        assert_eq!(rows[1][4], Data::String("2024-01-10".into()));
        assert_eq!(rows[1][5], Data::String("09:00:00".into()));
        assert_eq!(rows[1][6], Data::String("17:30:00".into()));

        // Second record: S2 still clocked in, clock_out cell empty.
        assert_eq!(rows[2][3], Data::String("S2".into()));
        assert!(rows[2][6].to_string().is_empty());

        // School snapshot is stamped onto every row.
        assert_eq!(rows[1][1], Data::String("SCH-1".into()));
        assert_eq!(rows[2][2], Data::String("Nexus High".into()));
    }

    #[tokio::test]
    async fn unwritable_destination_is_a_write_error() {
        let store = seeded_store().await;
        let path = Path::new("/nonexistent-dir/Report_test.xlsx");

        let err = export_attendance(&store, path).await.unwrap_err();
        assert!(matches!(err, AppError::Write(_)));
    }

    #[test]
    fn suggested_filename_shape() {
        let name = suggested_filename();
        assert!(name.starts_with("Report_"));
        assert!(name.ends_with(".xlsx"));
    }
}
