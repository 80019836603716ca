use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One staff member's attendance for one calendar day. The school identity
/// is stamped onto the row at clock-in on purpose: the audit trail stays
/// stable even if the station is later re-registered under another name.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AttendanceRecord {
    pub id: i64,
    pub school_id: String,
    pub school_name: String,
    pub staff_id: String,
    pub date: NaiveDate,
    pub clock_in: Option<NaiveTime>,
    pub clock_out: Option<NaiveTime>,
}

/// Row of the history view: attendance joined with the staff roster,
/// newest day first.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub name: String,
    pub clock_in: Option<NaiveTime>,
    pub clock_out: Option<NaiveTime>,
}
