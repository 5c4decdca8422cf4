//! Row-by-row checking of an extracted timesheet against an expected one.
//!
//! Every row of the review checklist is decided by its own rule and always
//! yields a boolean. Parsing problems never escape: a malformed value fails
//! the rows that depend on it and nothing else.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{normalize_hours, CheckRequest, ExpectedTimesheet, ExtractedTimesheet, Weekday};

pub const MAX_DAILY_HOURS_DEFAULT: f64 = 12.0;
pub const HOUR_TOLERANCE_DEFAULT: f64 = 0.01;

/// Thresholds used by the checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Inclusive ceiling for a single day.
    pub max_daily_hours: f64,
    /// Allowed difference between the stated total and the sum of the days (exclusive).
    pub hour_tolerance: f64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            max_daily_hours: MAX_DAILY_HOURS_DEFAULT,
            hour_tolerance: HOUR_TOLERANCE_DEFAULT,
        }
    }
}

/// One row of the review checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckRow {
    WeekWorked,
    DayHours(Weekday),
    TotalHours,
    Signatures,
    AdditionalText,
}

impl CheckRow {
    pub fn label(&self) -> &'static str {
        match self {
            Self::WeekWorked => "Week Worked",
            Self::DayHours(Weekday::Monday) => "Monday Hours",
            Self::DayHours(Weekday::Tuesday) => "Tuesday Hours",
            Self::DayHours(Weekday::Wednesday) => "Wednesday Hours",
            Self::DayHours(Weekday::Thursday) => "Thursday Hours",
            Self::DayHours(Weekday::Friday) => "Friday Hours",
            Self::DayHours(Weekday::Saturday) => "Saturday Hours",
            Self::DayHours(Weekday::Sunday) => "Sunday Hours",
            Self::TotalHours => "Total Hours",
            Self::Signatures => "Signatures",
            Self::AdditionalText => "Additional Text",
        }
    }

    /// All eleven rows in checklist order.
    pub fn all() -> impl Iterator<Item = CheckRow> {
        std::iter::once(Self::WeekWorked)
            .chain(Weekday::iter().map(Self::DayHours))
            .chain([Self::TotalHours, Self::Signatures, Self::AdditionalText])
    }
}

/// Pass/fail per checklist row. Serializes to an object keyed by row label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    #[serde(rename = "Week Worked")]
    pub week_worked: bool,
    #[serde(rename = "Monday Hours")]
    pub monday_hours: bool,
    #[serde(rename = "Tuesday Hours")]
    pub tuesday_hours: bool,
    #[serde(rename = "Wednesday Hours")]
    pub wednesday_hours: bool,
    #[serde(rename = "Thursday Hours")]
    pub thursday_hours: bool,
    #[serde(rename = "Friday Hours")]
    pub friday_hours: bool,
    #[serde(rename = "Saturday Hours")]
    pub saturday_hours: bool,
    #[serde(rename = "Sunday Hours")]
    pub sunday_hours: bool,
    #[serde(rename = "Total Hours")]
    pub total_hours: bool,
    #[serde(rename = "Signatures")]
    pub signatures: bool,
    #[serde(rename = "Additional Text")]
    pub additional_text: bool,
}

impl CheckResult {
    pub fn get(&self, row: CheckRow) -> bool {
        match row {
            CheckRow::WeekWorked => self.week_worked,
            CheckRow::DayHours(day) => *self.day(day),
            CheckRow::TotalHours => self.total_hours,
            CheckRow::Signatures => self.signatures,
            CheckRow::AdditionalText => self.additional_text,
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = (CheckRow, bool)> + '_ {
        CheckRow::all().map(|row| (row, self.get(row)))
    }

    pub fn all_passed(&self) -> bool {
        self.rows().all(|(_, passed)| passed)
    }

    fn day(&self, day: Weekday) -> &bool {
        match day {
            Weekday::Monday => &self.monday_hours,
            Weekday::Tuesday => &self.tuesday_hours,
            Weekday::Wednesday => &self.wednesday_hours,
            Weekday::Thursday => &self.thursday_hours,
            Weekday::Friday => &self.friday_hours,
            Weekday::Saturday => &self.saturday_hours,
            Weekday::Sunday => &self.sunday_hours,
        }
    }

    fn day_mut(&mut self, day: Weekday) -> &mut bool {
        match day {
            Weekday::Monday => &mut self.monday_hours,
            Weekday::Tuesday => &mut self.tuesday_hours,
            Weekday::Wednesday => &mut self.wednesday_hours,
            Weekday::Thursday => &mut self.thursday_hours,
            Weekday::Friday => &mut self.friday_hours,
            Weekday::Saturday => &mut self.saturday_hours,
            Weekday::Sunday => &mut self.sunday_hours,
        }
    }
}

impl CheckRequest {
    pub fn check(&self, config: &CheckConfig) -> CheckResult {
        check_timesheet(&self.extracted, &self.expected, config)
    }
}

/// Check every row of `extracted` against `expected`.
///
/// Daily rows are a plausibility bound (`0..=max_daily_hours`), not an
/// equality check against the expected schedule. The total must match the
/// sum of the days, must not exceed the expected total and must be positive.
/// Signatures only matter when `expected.require_signature` is set.
/// Additional text always passes.
pub fn check_timesheet(
    extracted: &ExtractedTimesheet,
    expected: &ExpectedTimesheet,
    config: &CheckConfig,
) -> CheckResult {
    let mut result = CheckResult {
        week_worked: week_matches(extracted, expected),
        total_hours: total_hours_valid(extracted, expected, config),
        signatures: signatures_valid(extracted, expected),
        additional_text: true,
        ..Default::default()
    };

    for day in Weekday::iter() {
        *result.day_mut(day) = day_within_bounds(extracted, day, config);
    }

    result
}

fn week_matches(extracted: &ExtractedTimesheet, expected: &ExpectedTimesheet) -> bool {
    extracted.week_worked.trim() == expected.week_worked.trim()
}

fn day_within_bounds(extracted: &ExtractedTimesheet, day: Weekday, config: &CheckConfig) -> bool {
    match extracted.hours.hours(day) {
        Ok(hours) => (0.0..=config.max_daily_hours).contains(&hours),
        Err(err) => {
            tracing::debug!(day = %day, "daily hours rejected: {}", err);
            false
        }
    }
}

fn total_hours_valid(
    extracted: &ExtractedTimesheet,
    expected: &ExpectedTimesheet,
    config: &CheckConfig,
) -> bool {
    let extracted_total = normalize_hours(extracted.total_hours.as_ref()).unwrap_or_else(|err| {
        tracing::debug!("extracted total rejected: {}", err);
        -1.0
    });

    let expected_total = normalize_hours(expected.total_hours.as_ref())
        .or_else(|_| expected.hours.sum_hours())
        .unwrap_or(0.0);

    // NaN is never within tolerance, so a malformed day fails consistency.
    let daily_sum = extracted.hours.sum_hours().unwrap_or(f64::NAN);

    let consistent = (daily_sum - extracted_total).abs() < config.hour_tolerance;
    let within_expected = extracted_total <= expected_total;
    let positive = extracted_total > 0.0;

    consistent && within_expected && positive
}

fn signatures_valid(extracted: &ExtractedTimesheet, expected: &ExpectedTimesheet) -> bool {
    if expected.require_signature.unwrap_or(false) {
        extracted.signatures.unwrap_or(false)
    } else {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DaySet, HourValue};

    const DAY_LABELS: [&str; 7] = [
        "Monday Hours",
        "Tuesday Hours",
        "Wednesday Hours",
        "Thursday Hours",
        "Friday Hours",
        "Saturday Hours",
        "Sunday Hours",
    ];

    fn work_week() -> DaySet {
        [
            ("Mon", "8hrs"),
            ("Tue", "8hrs"),
            ("Wed", "8hrs"),
            ("Thu", "8hrs"),
            ("Fri", "8hrs"),
            ("Sat", "0hrs"),
            ("Sun", "0hrs"),
        ]
        .into_iter()
        .collect()
    }

    fn base_request() -> CheckRequest {
        CheckRequest {
            extracted: ExtractedTimesheet {
                week_worked: "2025-08-11..2025-08-17".to_string(),
                hours: work_week(),
                total_hours: Some("40hrs".into()),
                signatures: Some(true),
                additional_text: Some("N/A".to_string()),
                employee_name: "John Doe".to_string(),
                po_number: "PO#EZX-2025-08-001".to_string(),
            },
            expected: ExpectedTimesheet {
                week_worked: "2025-08-11..2025-08-17".to_string(),
                hours: work_week(),
                total_hours: Some("40hrs".into()),
                employee_name: "John Doe".to_string(),
                po_number: "PO#EZX-2025-08-001".to_string(),
                require_signature: None,
            },
        }
    }

    fn check(request: &CheckRequest) -> CheckResult {
        request.check(&CheckConfig::default())
    }

    fn failed_rows(result: &CheckResult) -> Vec<&'static str> {
        result
            .rows()
            .filter(|(_, passed)| !passed)
            .map(|(row, _)| row.label())
            .collect()
    }

    #[test]
    fn valid_payload_passes_every_row() {
        let result = check(&base_request());

        assert!(result.all_passed());
        assert_eq!(result.rows().count(), 11);
    }

    #[test]
    fn result_serializes_with_all_eleven_labels() {
        let json = serde_json::to_value(check(&base_request())).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 11);
        for row in CheckRow::all() {
            assert_eq!(object[row.label()], true, "{}", row.label());
        }
    }

    #[test]
    fn empty_request_still_yields_every_row() {
        let result = check(&CheckRequest::default());

        // Empty week tokens are equal; no signature required; nothing else passes.
        assert_eq!(failed_rows(&result).len(), 8);
        assert!(result.week_worked);
        assert!(result.signatures);
        assert!(result.additional_text);
        assert!(!result.total_hours);
    }

    #[test]
    fn week_mismatch_fails_only_week_row() {
        let mut request = base_request();
        request.extracted.week_worked = "2025-08-18..2025-08-24".to_string();

        assert_eq!(failed_rows(&check(&request)), ["Week Worked"]);
    }

    #[test]
    fn week_comparison_trims_whitespace() {
        let mut request = base_request();
        request.extracted.week_worked = "  2025-08-11..2025-08-17\n".to_string();

        assert!(check(&request).week_worked);
    }

    #[test]
    fn unparsable_day_fails_that_day_and_total() {
        let mut request = base_request();
        request.extracted.hours.insert("Tue", "oops");

        assert_eq!(
            failed_rows(&check(&request)),
            ["Tuesday Hours", "Total Hours"]
        );
    }

    #[test]
    fn day_over_cap_fails_that_day_and_total() {
        let mut request = base_request();
        request.extracted.hours.insert("Wed", "13hrs");

        assert_eq!(
            failed_rows(&check(&request)),
            ["Wednesday Hours", "Total Hours"]
        );
    }

    #[test]
    fn total_exceeding_expected_fails_total_only() {
        let mut request = base_request();
        request.extracted.hours.insert("Sat", "4");
        request.extracted.total_hours = Some("44".into());
        request.expected.total_hours = Some("40".into());

        let result = check(&request);
        assert!(result.saturday_hours);
        assert_eq!(failed_rows(&result), ["Total Hours"]);
    }

    #[test]
    fn all_zero_week_fails_total() {
        let mut request = base_request();
        request.extracted.hours = Weekday::iter().map(|day| (day.key(), "0")).collect();
        request.extracted.total_hours = Some("0".into());

        assert_eq!(failed_rows(&check(&request)), ["Total Hours"]);
    }

    #[test]
    fn total_not_matching_sum_fails() {
        let mut request = base_request();
        request.extracted.total_hours = Some("39.9".into());

        assert_eq!(failed_rows(&check(&request)), ["Total Hours"]);
    }

    #[test]
    fn total_within_tolerance_passes() {
        let mut request = base_request();
        request.extracted.total_hours = Some("39.995".into());

        assert!(check(&request).total_hours);
    }

    #[test]
    fn tolerance_comparison_is_strict() {
        let mut request = base_request();
        request.extracted.hours = [("Mon", 1.0)].into_iter().collect();
        request.extracted.total_hours = Some(HourValue::Number(1.5));
        let config = CheckConfig {
            hour_tolerance: 0.5,
            ..Default::default()
        };

        assert!(!request.check(&config).total_hours);
    }

    #[test]
    fn missing_day_fails_that_day_and_total() {
        let mut request = base_request();
        request.extracted.hours.remove(Weekday::Thursday);

        assert_eq!(
            failed_rows(&check(&request)),
            ["Thursday Hours", "Total Hours"]
        );
    }

    #[test]
    fn negative_string_hours_fail_that_day_and_total() {
        let mut request = base_request();
        request.extracted.hours.insert("Mon", "-1");

        assert_eq!(
            failed_rows(&check(&request)),
            ["Monday Hours", "Total Hours"]
        );
    }

    #[test]
    fn negative_numeric_hours_are_out_of_range() {
        let mut request = base_request();
        request.extracted.hours.insert("Mon", -1.0);

        let result = check(&request);
        assert!(!result.monday_hours);
        assert!(!result.total_hours);
    }

    #[test]
    fn daily_bounds_are_inclusive() {
        let cases = [
            (Weekday::Monday, "0", true),
            (Weekday::Tuesday, "0.25h", true),
            (Weekday::Wednesday, "11.99", true),
            (Weekday::Thursday, "12", true),
            (Weekday::Friday, "12.01", false),
            (Weekday::Saturday, "-0.01", false),
        ];

        for (day, value, expected) in cases {
            let mut request = base_request();
            request.extracted.hours.insert(day.key(), value);

            let result = check(&request);
            assert_eq!(
                result.get(CheckRow::DayHours(day)),
                expected,
                "{} = {}",
                day,
                value
            );
        }
    }

    #[test]
    fn daily_cap_is_configurable() {
        let mut request = base_request();
        request.extracted.hours.insert("Mon", "10");
        request.extracted.total_hours = Some("42".into());
        request.expected.total_hours = Some("42".into());
        let config = CheckConfig {
            max_daily_hours: 9.0,
            ..Default::default()
        };

        assert_eq!(failed_rows(&request.check(&config)), ["Monday Hours"]);
        assert!(check(&request).all_passed());
    }

    #[test]
    fn daily_rows_ignore_expected_schedule() {
        let mut request = base_request();
        request.expected.hours = [("Mon", "2hrs")].into_iter().collect();

        assert!(check(&request).monday_hours);
    }

    #[test]
    fn expected_total_falls_back_to_expected_days() {
        let mut request = base_request();
        request.expected.total_hours = Some("unknown".into());

        assert!(check(&request).total_hours);

        request.expected.hours.insert("Fri", "4hrs");
        assert!(!check(&request).total_hours);
    }

    #[test]
    fn unusable_expected_total_defaults_to_zero() {
        let mut request = base_request();
        request.expected.total_hours = None;
        request.expected.hours.insert("Mon", "oops");

        assert_eq!(failed_rows(&check(&request)), ["Total Hours"]);
    }

    #[test]
    fn missing_extracted_total_fails_total() {
        let mut request = base_request();
        request.extracted.total_hours = None;

        assert_eq!(failed_rows(&check(&request)), ["Total Hours"]);
    }

    #[test]
    fn numeric_hours_are_accepted() {
        let mut request = base_request();
        request.extracted.hours = Weekday::iter()
            .map(|day| (day.key(), if day < Weekday::Saturday { 8.0 } else { 0.0 }))
            .collect();
        request.extracted.total_hours = Some(HourValue::Number(40.0));

        assert!(check(&request).all_passed());
    }

    #[test]
    fn signature_not_required_by_default() {
        let mut request = base_request();
        request.extracted.signatures = Some(false);
        assert!(check(&request).signatures);

        request.extracted.signatures = None;
        assert!(check(&request).signatures);

        request.expected.require_signature = Some(false);
        assert!(check(&request).signatures);
    }

    #[test]
    fn required_signature_must_be_present() {
        let mut request = base_request();
        request.expected.require_signature = Some(true);

        request.extracted.signatures = Some(false);
        assert_eq!(failed_rows(&check(&request)), ["Signatures"]);

        request.extracted.signatures = None;
        assert_eq!(failed_rows(&check(&request)), ["Signatures"]);

        request.extracted.signatures = Some(true);
        assert!(check(&request).all_passed());
    }

    #[test]
    fn checking_is_deterministic() {
        let mut request = base_request();
        request.extracted.hours.insert("Tue", "oops");

        assert_eq!(check(&request), check(&request));
    }

    #[test]
    fn changing_one_day_only_touches_that_day_and_total() {
        for day in Weekday::iter() {
            let mut request = base_request();
            request.extracted.hours.insert(day.key(), "15");

            let result = check(&request);
            for (row, passed) in result.rows() {
                let affected = row == CheckRow::DayHours(day) || row == CheckRow::TotalHours;
                assert_eq!(passed, !affected, "{} after changing {}", row.label(), day);
            }
        }
    }

    #[test]
    fn labels_follow_checklist_order() {
        let labels: Vec<_> = CheckRow::all().map(|row| row.label()).collect();

        assert_eq!(labels.first(), Some(&"Week Worked"));
        assert_eq!(labels[1..8], DAY_LABELS);
        assert_eq!(labels[8..], ["Total Hours", "Signatures", "Additional Text"]);
    }

    #[test]
    fn request_with_odd_values_still_checks() {
        let request: CheckRequest = serde_json::from_str(
            r#"{
                "extracted": {
                    "week_worked": "w1",
                    "hours": {"Mon": true, "Tue": null, "Wed": {"h": 8}},
                    "total_hours": []
                },
                "expected": {"week_worked": "w1"}
            }"#,
        )
        .unwrap();

        let result = check(&request);
        assert!(result.week_worked);
        assert!(!result.monday_hours);
        assert!(!result.tuesday_hours);
        assert!(!result.wednesday_hours);
        assert!(!result.total_hours);
    }

    #[test]
    fn null_fields_degrade_to_failed_rows() {
        let request: CheckRequest = serde_json::from_str(
            r#"{
                "extracted": {"week_worked": "w1", "hours": null, "employee_name": null},
                "expected": {"week_worked": "w1", "hours": null, "total_hours": null}
            }"#,
        )
        .unwrap();

        let result = check(&request);
        assert_eq!(result.rows().count(), 11);
        assert!(result.week_worked);
        assert!(!result.monday_hours);
        assert!(!result.sunday_hours);
        assert!(!result.total_hours);
        assert!(result.signatures);
        assert!(result.additional_text);
    }
}
