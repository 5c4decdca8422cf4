use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use super::Weekday;
use crate::{normalize_hours, HourValue, MalformedHour};

/// Hours per weekday, keyed by short day names.
///
/// Both `Tue`/`Thu` and the form spellings `Tues`/`Thur` are recognised when
/// looking a day up. A key that is not present is absent, which is different
/// from zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DaySet(BTreeMap<String, HourValue>);

impl DaySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<HourValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, day: Weekday) -> Option<HourValue> {
        self.0
            .remove(day.key())
            .or_else(|| self.0.remove(day.sheet_key()))
    }

    pub fn get(&self, day: Weekday) -> Option<&HourValue> {
        self.0
            .get(day.key())
            .or_else(|| self.0.get(day.sheet_key()))
    }

    /// Normalized hours for one day; a missing day is malformed.
    pub fn hours(&self, day: Weekday) -> Result<f64, MalformedHour> {
        normalize_hours(self.get(day))
    }

    /// Sum of all seven days. Missing days count as zero, but a present
    /// value that does not parse fails the whole sum.
    pub fn sum_hours(&self) -> Result<f64, MalformedHour> {
        Weekday::iter().try_fold(0.0, |total, day| match self.get(day) {
            Some(value) => Ok(total + value.to_hours()?),
            None => Ok(total),
        })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HourValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<HourValue>> FromIterator<(K, V)> for DaySet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
