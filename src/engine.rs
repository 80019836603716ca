use chrono::{NaiveDate, NaiveTime};
use tracing::info;

use crate::error::{AppError, Result};
use crate::store::{attendance, school, staff, Store};

/// Business result of one attendance submission. These are answers, not
/// errors: a denied or already-complete outcome is final for that
/// submission and is never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Unknown id, or a member the admin has not approved yet.
    Denied,
    ClockedIn(String),
    ClockedOut(String),
    /// Both timestamps already recorded for this day.
    AlreadyComplete,
}

/// Decides and records the outcome of a single submission at the clock
/// station. Per (staff member, day) the reachable states are: no record,
/// clocked in, then complete; complete is terminal until the next day.
///
/// The whole decision runs inside one transaction, so the caller can never
/// observe a half-applied clock-in or clock-out.
pub async fn submit(
    store: &Store,
    staff_id: &str,
    today: NaiveDate,
    now: NaiveTime,
) -> Result<Outcome> {
    let staff_id = staff_id.trim();

    let mut tx = store.begin().await?;

    let member = match staff::find(&mut *tx, staff_id).await? {
        Some(m) if m.is_approved => m,
        // Empty and unknown ids land here too; nothing is written.
        _ => return Ok(Outcome::Denied),
    };

    let outcome = match attendance::for_day(&mut *tx, staff_id, today).await? {
        None => {
            let school = school::fetch(&mut *tx)
                .await?
                .ok_or(AppError::Unconfigured)?;
            attendance::open(&mut *tx, &school, staff_id, today, now).await?;
            Outcome::ClockedIn(member.name)
        }
        Some(rec) if rec.clock_out.is_none() => {
            attendance::close(&mut *tx, staff_id, today, now).await?;
            Outcome::ClockedOut(member.name)
        }
        Some(_) => Outcome::AlreadyComplete,
    };

    tx.commit().await?;

    info!(staff_id, %today, outcome = ?outcome, "Attendance submission");
    Ok(outcome)
}
