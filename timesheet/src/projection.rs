//! Reduce a stored metadata record to the small shape the row checks consume.

use serde_json::Value;

use crate::{
    clock_to_hours_label, format_decimal, DaySet, ExtractedTimesheet, HourValue, StoredMetadata,
    Weekday,
};

impl StoredMetadata {
    /// Project this record into an [`ExtractedTimesheet`].
    ///
    /// Hours come from the totals row when it has any days, otherwise from
    /// the individual work entries. `signatures` and `additional_text` are
    /// only set when the record carries them.
    pub fn to_extracted(&self) -> ExtractedTimesheet {
        ExtractedTimesheet {
            week_worked: self.week_worked(),
            hours: self.daily_hours(),
            total_hours: Some(HourValue::Text(self.total_hours_label())),
            signatures: self.signatures.as_ref().and_then(signature_flag),
            additional_text: self.additional_text.as_ref().and_then(text_value),
            employee_name: self.employee.name.clone(),
            po_number: self.base.po_number.clone(),
        }
    }

    fn daily_hours(&self) -> DaySet {
        if !self.totals_row.by_day.is_empty() {
            return self
                .totals_row
                .by_day
                .iter()
                .map(|(day, clock)| (day.as_str(), clock_to_hours_label(clock)))
                .collect();
        }

        self.work_entries
            .iter()
            .filter_map(|entry| match Weekday::from_full_name(&entry.weekday) {
                Some(day) => Some((day.sheet_key(), clock_to_hours_label(&entry.total_daily_hours))),
                None => {
                    tracing::debug!(weekday = %entry.weekday, "skipping work entry with unknown weekday");
                    None
                }
            })
            .collect()
    }

    fn total_hours_label(&self) -> String {
        match self.weekly_total.total_decimal_hours {
            Some(HourValue::Number(hours)) => format!("{}hrs", format_decimal(hours)),
            _ => clock_to_hours_label(&self.weekly_total.total_hours),
        }
    }

    /// `<earliest>..<latest>` over the ISO dates of the work entries.
    fn week_worked(&self) -> String {
        let dates = self
            .work_entries
            .iter()
            .map(|entry| entry.date_iso.as_str())
            .filter(|date| !date.is_empty());

        let (first, last) = dates.fold((None, None), |(first, last): (Option<&str>, Option<&str>), date| {
            (
                Some(first.map_or(date, |first| first.min(date))),
                Some(last.map_or(date, |last| last.max(date))),
            )
        });

        match (first, last) {
            (Some(first), Some(last)) => format!("{first}..{last}"),
            _ => String::new(),
        }
    }
}

impl From<&StoredMetadata> for ExtractedTimesheet {
    fn from(meta: &StoredMetadata) -> Self {
        meta.to_extracted()
    }
}

/// Truthiness of a stored signature marker; `null` means not recorded.
fn signature_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Null => None,
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => Some(number.as_f64().is_some_and(|n| n != 0.0)),
        Value::String(text) => Some(!text.is_empty()),
        Value::Array(items) => Some(!items.is_empty()),
        Value::Object(fields) => Some(!fields.is_empty()),
    }
}

fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
