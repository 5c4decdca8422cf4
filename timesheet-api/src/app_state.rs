use std::sync::Arc;

use timesheet::CheckConfig;

use crate::{domain::TimesheetService, repositories::TimesheetRepository};

#[derive(Clone)]
pub struct AppState {
    pub timesheet_service: Arc<TimesheetService>,
}

impl AppState {
    pub fn new(timesheet_repo: Arc<dyn TimesheetRepository>, check_config: CheckConfig) -> Self {
        Self {
            timesheet_service: Arc::new(TimesheetService::new(timesheet_repo, check_config)),
        }
    }
}
