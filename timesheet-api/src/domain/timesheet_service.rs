use std::sync::Arc;

use serde_json::Value;
use timesheet::{
    CheckConfig, CheckRequest, CheckResult, ExpectedTimesheet, ExtractedTimesheet, StoredMetadata,
};

use super::{from_stored_blob, to_stored_blob, MetadataExtras, TimesheetError, TimesheetId};
use crate::repositories::{NewTimesheet, TimesheetRepository};

pub const DEFAULT_STATUS: &str = "done";

/// Use cases behind the HTTP routes: store extraction records, read them back
/// whole or projected, and run the row checks.
pub struct TimesheetService {
    repo: Arc<dyn TimesheetRepository>,
    check_config: CheckConfig,
}

impl TimesheetService {
    pub fn new(repo: Arc<dyn TimesheetRepository>, check_config: CheckConfig) -> Self {
        Self { repo, check_config }
    }

    /// Store a metadata record. It must be a JSON object shaped like
    /// [`StoredMetadata`]; the submitted JSON is kept as-is.
    pub async fn save_meta(
        &self,
        meta: Value,
        status: Option<String>,
        extras: MetadataExtras,
    ) -> Result<TimesheetId, TimesheetError> {
        if !meta.is_object() {
            return Err(TimesheetError::InvalidMetadata(
                "meta_data must be an object".to_string(),
            ));
        }
        serde_json::from_value::<StoredMetadata>(meta.clone())
            .map_err(|err| TimesheetError::InvalidMetadata(err.to_string()))?;

        let new_timesheet = NewTimesheet {
            meta_data: to_stored_blob(meta, &extras),
            status: status
                .filter(|status| !status.is_empty())
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        };

        let tid = self.repo.insert_timesheet(&new_timesheet).await?;
        tracing::info!(tid, status = %new_timesheet.status, "saved timesheet metadata");

        Ok(TimesheetId::new(tid))
    }

    pub async fn stored_meta(&self, id: TimesheetId) -> Result<StoredMetadata, TimesheetError> {
        let blob = self
            .repo
            .timesheet_by_id(id.as_i32())
            .await?
            .and_then(|row| row.meta_data)
            .filter(|blob| !blob.0.is_null())
            .ok_or(TimesheetError::NotFound(id))?;

        from_stored_blob(blob.0).map_err(|err| {
            tracing::error!("stored metadata for timesheet {} is unreadable: {}", id, err);
            TimesheetError::CorruptRecord(id, err.to_string())
        })
    }

    /// The stored record reduced to the shape the row checks consume.
    pub async fn extracted(&self, id: TimesheetId) -> Result<ExtractedTimesheet, TimesheetError> {
        Ok(self.stored_meta(id).await?.to_extracted())
    }

    pub fn check(&self, request: &CheckRequest) -> CheckResult {
        request.check(&self.check_config)
    }

    /// Check a stored record against `expected`.
    pub async fn check_stored(
        &self,
        id: TimesheetId,
        expected: ExpectedTimesheet,
    ) -> Result<CheckResult, TimesheetError> {
        let request = CheckRequest {
            extracted: self.extracted(id).await?,
            expected,
        };

        Ok(self.check(&request))
    }
}
