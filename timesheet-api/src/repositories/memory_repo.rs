use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DatabaseTimesheet, NewTimesheet, RepositoryError, TimesheetRepository};

/// In-process stand-in for the Postgres repository.
#[derive(Default)]
pub struct MemoryTimesheetRepository {
    rows: RwLock<Vec<DatabaseTimesheet>>,
}

#[async_trait]
impl TimesheetRepository for MemoryTimesheetRepository {
    async fn insert_timesheet(&self, timesheet: &NewTimesheet) -> Result<i32, RepositoryError> {
        let mut rows = self.rows.write().await;
        let tid = rows.len() as i32 + 1;

        rows.push(DatabaseTimesheet {
            tid,
            meta_data: Some(sqlx::types::Json(timesheet.meta_data.clone())),
            created_at: Some(time::OffsetDateTime::now_utc()),
            status: Some(timesheet.status.clone()),
        });

        Ok(tid)
    }

    async fn timesheet_by_id(&self, tid: i32) -> Result<Option<DatabaseTimesheet>, RepositoryError> {
        let rows = self.rows.read().await;

        Ok(rows.iter().find(|row| row.tid == tid).cloned())
    }
}
