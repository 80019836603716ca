use chrono::{NaiveDate, NaiveTime};
use sqlx::SqliteExecutor;

use crate::model::{AttendanceRecord, HistoryEntry, SchoolInfo};

// The on-disk contract stores dates and times as text in these formats.
const DATE_FMT: &str = "%Y-%m-%d";
const TIME_FMT: &str = "%H:%M:%S";

pub(crate) async fn for_day(
    ex: impl SqliteExecutor<'_>,
    staff_id: &str,
    date: NaiveDate,
) -> Result<Option<AttendanceRecord>, sqlx::Error> {
    sqlx::query_as::<_, AttendanceRecord>(
        "SELECT id, school_id, school_name, staff_id, date, clock_in, clock_out \
         FROM attendance WHERE staff_id = ? AND date = ?",
    )
    .bind(staff_id)
    .bind(date.format(DATE_FMT).to_string())
    .fetch_optional(ex)
    .await
}

/// First clock-in of the day: creates the row with the school identity
/// snapshot and an open clock_out.
pub(crate) async fn open(
    ex: impl SqliteExecutor<'_>,
    school: &SchoolInfo,
    staff_id: &str,
    date: NaiveDate,
    clock_in: NaiveTime,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO attendance (school_id, school_name, staff_id, date, clock_in) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&school.id)
    .bind(&school.name)
    .bind(staff_id)
    .bind(date.format(DATE_FMT).to_string())
    .bind(clock_in.format(TIME_FMT).to_string())
    .execute(ex)
    .await?;
    Ok(())
}

/// Sets clock_out on the day's open row. Guarded by `clock_out IS NULL`, so
/// a completed day reports zero rows touched and is never overwritten.
pub(crate) async fn close(
    ex: impl SqliteExecutor<'_>,
    staff_id: &str,
    date: NaiveDate,
    clock_out: NaiveTime,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE attendance SET clock_out = ? \
         WHERE staff_id = ? AND date = ? AND clock_out IS NULL",
    )
    .bind(clock_out.format(TIME_FMT).to_string())
    .bind(staff_id)
    .bind(date.format(DATE_FMT).to_string())
    .execute(ex)
    .await?;
    Ok(result.rows_affected())
}

pub(crate) async fn all(
    ex: impl SqliteExecutor<'_>,
) -> Result<Vec<AttendanceRecord>, sqlx::Error> {
    sqlx::query_as::<_, AttendanceRecord>(
        "SELECT id, school_id, school_name, staff_id, date, clock_in, clock_out \
         FROM attendance ORDER BY id",
    )
    .fetch_all(ex)
    .await
}

pub(crate) async fn history(
    ex: impl SqliteExecutor<'_>,
    limit: u32,
) -> Result<Vec<HistoryEntry>, sqlx::Error> {
    sqlx::query_as::<_, HistoryEntry>(
        "SELECT a.date, s.name, a.clock_in, a.clock_out \
         FROM attendance a JOIN staff s ON a.staff_id = s.id \
         ORDER BY a.date DESC LIMIT ?",
    )
    .bind(limit)
    .fetch_all(ex)
    .await
}
