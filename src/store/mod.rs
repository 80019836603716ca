pub(crate) mod attendance;
pub(crate) mod school;
pub(crate) mod staff;

use sqlx::sqlite::SqlitePool;
use sqlx::{Sqlite, Transaction};
use tracing::error;

use crate::error::{AppError, Result};
use crate::model::{AttendanceRecord, HistoryEntry, SchoolInfo, StaffMember};

/// Owns the database pool. Every logical operation runs as one scoped
/// transaction obtained from [`Store::begin`], so a handle can never leak
/// and a crash mid-operation rolls back cleanly.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub(crate) async fn begin(&self) -> Result<Transaction<'static, Sqlite>> {
        Ok(self.pool.begin().await?)
    }

    pub async fn school(&self) -> Result<Option<SchoolInfo>> {
        school::fetch(&self.pool).await.map_err(|e| {
            error!(error = %e, "Failed to read school registration");
            AppError::from(e)
        })
    }

    /// First-time setup, or re-registration. The previous identity (if any)
    /// is replaced so the table keeps at most one row.
    pub async fn register_school(&self, id: &str, name: &str) -> Result<()> {
        let mut tx = self.begin().await?;
        school::clear(&mut *tx).await?;
        school::insert(&mut *tx, id, name).await?;
        tx.commit().await?;
        Ok(())
    }

    pub async fn staff_list(&self) -> Result<Vec<StaffMember>> {
        staff::list(&self.pool).await.map_err(|e| {
            error!(error = %e, "Failed to list staff");
            AppError::from(e)
        })
    }

    pub async fn find_staff(&self, staff_id: &str) -> Result<Option<StaffMember>> {
        staff::find(&self.pool, staff_id).await.map_err(|e| {
            error!(error = %e, staff_id, "Failed to look up staff member");
            AppError::from(e)
        })
    }

    /// Full attendance table in storage order, for the report export.
    pub async fn all_attendance(&self) -> Result<Vec<AttendanceRecord>> {
        attendance::all(&self.pool).await.map_err(|e| {
            error!(error = %e, "Failed to dump attendance table");
            AppError::from(e)
        })
    }

    pub async fn history(&self, limit: u32) -> Result<Vec<HistoryEntry>> {
        attendance::history(&self.pool, limit).await.map_err(|e| {
            error!(error = %e, "Failed to fetch attendance history");
            AppError::from(e)
        })
    }
}
