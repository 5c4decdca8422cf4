use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::DaySet;
use crate::HourValue;

/// A timesheet as read from a submitted document; the record under test.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedTimesheet {
    /// Opaque week token such as `2025-08-11..2025-08-17`, compared verbatim.
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub week_worked: String,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub hours: DaySet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_hours: Option<HourValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signatures: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_text: Option<String>,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub employee_name: String,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub po_number: String,
}

/// The reference a submitted timesheet is checked against.
///
/// `hours` is the planned schedule. It only matters as a fallback source for
/// the expected total; days are not compared one by one.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpectedTimesheet {
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub week_worked: String,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub hours: DaySet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_hours: Option<HourValue>,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub employee_name: String,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub po_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_signature: Option<bool>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub extracted: ExtractedTimesheet,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub expected: ExpectedTimesheet,
}
