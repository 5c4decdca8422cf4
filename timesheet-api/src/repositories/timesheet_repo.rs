use async_trait::async_trait;
use serde_json::Value;
use sqlx::{types::Json, PgPool};

use super::repo_error::RepositoryError;

/// Storage for extraction records. Rows are written once and never updated.
#[async_trait]
pub trait TimesheetRepository: Send + Sync {
    async fn insert_timesheet(&self, timesheet: &NewTimesheet) -> Result<i32, RepositoryError>;
    async fn timesheet_by_id(&self, tid: i32) -> Result<Option<DatabaseTimesheet>, RepositoryError>;
}

pub struct TimesheetRepositoryImpl {
    pool: PgPool,
}

impl TimesheetRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DatabaseTimesheet {
    pub tid: i32,
    pub meta_data: Option<Json<Value>>,
    pub created_at: Option<time::OffsetDateTime>,
    pub status: Option<String>,
}

pub struct NewTimesheet {
    pub meta_data: Value,
    pub status: String,
}

#[async_trait]
impl TimesheetRepository for TimesheetRepositoryImpl {
    async fn insert_timesheet(&self, timesheet: &NewTimesheet) -> Result<i32, RepositoryError> {
        let tid = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO timesheet (meta_data, created_at, status)
            VALUES ($1, NOW(), $2)
            RETURNING tid
            "#,
        )
        .bind(Json(&timesheet.meta_data))
        .bind(&timesheet.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(tid)
    }

    async fn timesheet_by_id(&self, tid: i32) -> Result<Option<DatabaseTimesheet>, RepositoryError> {
        let timesheet = sqlx::query_as::<_, DatabaseTimesheet>(
            r#"
            SELECT tid, meta_data, created_at, status
            FROM timesheet
            WHERE tid = $1
            "#,
        )
        .bind(tid)
        .fetch_optional(&self.pool)
        .await?;

        Ok(timesheet)
    }
}
