//! The full record extracted from an uploaded timesheet document.
//!
//! Every field defaults when absent so partially extracted documents can still
//! be stored and read back. Keys this model does not know about are kept in
//! `extra` and written back unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::{serde_as, DefaultOnNull};

use crate::HourValue;

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredMetadata {
    #[serde_as(as = "DefaultOnNull")]
    pub base: BaseInfo,
    #[serde_as(as = "DefaultOnNull")]
    pub employee: EmployeeInfo,
    #[serde_as(as = "DefaultOnNull")]
    pub work_entries: Vec<WorkEntry>,
    #[serde_as(as = "DefaultOnNull")]
    pub weekly_total: WeeklyTotal,
    #[serde_as(as = "DefaultOnNull")]
    pub tasks: Vec<Task>,
    #[serde_as(as = "DefaultOnNull")]
    pub totals_row: TotalsRow,
    /// Date printed on the form, e.g. `8/15/2025`.
    #[serde_as(as = "DefaultOnNull")]
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signatures: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_text: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseInfo {
    #[serde_as(as = "DefaultOnNull")]
    pub po_number: String,
    #[serde_as(as = "DefaultOnNull")]
    pub client: String,
    #[serde_as(as = "DefaultOnNull")]
    pub supervisor: String,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeInfo {
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub company: String,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimePeriod {
    #[serde_as(as = "DefaultOnNull")]
    pub start: String,
    #[serde_as(as = "DefaultOnNull")]
    pub finish: String,
    #[serde_as(as = "DefaultOnNull")]
    pub time: String,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraInOut {
    #[serde_as(as = "DefaultOnNull")]
    pub morning: String,
    #[serde_as(as = "DefaultOnNull")]
    pub afternoon: String,
}

/// One day row of the work periods table.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkEntry {
    /// Full weekday name as printed, e.g. `Monday`.
    #[serde_as(as = "DefaultOnNull")]
    pub weekday: String,
    #[serde_as(as = "DefaultOnNull")]
    pub date_original: String,
    #[serde_as(as = "DefaultOnNull")]
    pub date_iso: String,
    #[serde_as(as = "DefaultOnNull")]
    pub morning: TimePeriod,
    #[serde_as(as = "DefaultOnNull")]
    pub afternoon: TimePeriod,
    #[serde_as(as = "DefaultOnNull")]
    pub extra_in_out: ExtraInOut,
    /// Clock duration, `H:MM`.
    #[serde_as(as = "DefaultOnNull")]
    pub total_daily_hours: String,
    pub total_daily_decimal: Option<f64>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeklyTotal {
    #[serde_as(as = "DefaultOnNull")]
    pub total_hours: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_decimal_hours: Option<HourValue>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    #[serde_as(as = "DefaultOnNull")]
    pub task_name: String,
    /// Clock durations keyed by the form's column headers (`Mon`, `Tues`, ..., `Sat/Sun`).
    #[serde_as(as = "DefaultOnNull<BTreeMap<_, DefaultOnNull>>")]
    pub per_day: BTreeMap<String, String>,
    #[serde_as(as = "DefaultOnNull")]
    pub total_hours: String,
    pub decimal_hours: Option<f64>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TotalsRow {
    #[serde_as(as = "DefaultOnNull")]
    pub label: String,
    #[serde_as(as = "DefaultOnNull<BTreeMap<_, DefaultOnNull>>")]
    pub by_day: BTreeMap<String, String>,
    #[serde_as(as = "DefaultOnNull")]
    pub total_hours: String,
    pub total_decimal_hours: Option<f64>,
}
