use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

/// The seven days a timesheet row can refer to, Monday first.
///
/// `Display` yields the short key used in hour maps (`Mon`, `Tue`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, IntoStaticStr)]
pub enum Weekday {
    #[strum(serialize = "Mon")]
    Monday,
    #[strum(serialize = "Tue")]
    Tuesday,
    #[strum(serialize = "Wed")]
    Wednesday,
    #[strum(serialize = "Thu")]
    Thursday,
    #[strum(serialize = "Fri")]
    Friday,
    #[strum(serialize = "Sat")]
    Saturday,
    #[strum(serialize = "Sun")]
    Sunday,
}

impl Weekday {
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// Abbreviation printed on the timesheet form, which differs from
    /// [`Weekday::key`] for Tuesday and Thursday.
    pub fn sheet_key(self) -> &'static str {
        match self {
            Self::Tuesday => "Tues",
            Self::Thursday => "Thur",
            other => other.key(),
        }
    }

    pub fn full_name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Match a full weekday name, ignoring case and surrounding whitespace.
    pub fn from_full_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::iter().find(|day| day.full_name().eq_ignore_ascii_case(name))
    }
}
