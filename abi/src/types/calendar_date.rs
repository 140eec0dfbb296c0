use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Locale, NaiveDate, ParseError, Utc};
use serde::{Deserialize, Serialize};

/// A calendar day. Comparison and equality are at day granularity only;
/// time-of-day never enters the picture.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    pub fn plus_days(self, days: u64) -> Option<Self> {
        self.0.checked_add_days(Days::new(days)).map(Self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// French long form shown on the selected-date badges, e.g. "10 juin 2024".
    pub fn long_format(&self) -> String {
        self.0
            .format_localized("%d %B %Y", Locale::fr_FR)
            .to_string()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_ymd_should_work() {
        let date = CalendarDate::from_ymd(2024, 6, 10).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 10);
    }

    #[test]
    fn from_ymd_should_reject_invalid_day() {
        assert!(CalendarDate::from_ymd(2024, 2, 30).is_none());
        assert!(CalendarDate::from_ymd(2024, 13, 1).is_none());
    }

    #[test]
    fn parse_should_work() {
        let date: CalendarDate = "2024-06-10".parse().unwrap();
        assert_eq!(date, CalendarDate::from_ymd(2024, 6, 10).unwrap());
        assert_eq!(date.to_string(), "2024-06-10");
    }

    #[test]
    fn ordering_should_be_by_day() {
        let d1 = CalendarDate::from_ymd(2024, 6, 10).unwrap();
        let d2 = CalendarDate::from_ymd(2024, 6, 11).unwrap();
        let d3 = CalendarDate::from_ymd(2024, 7, 1).unwrap();
        assert!(d1 < d2);
        assert!(d2 < d3);
    }

    #[test]
    fn plus_days_should_work() {
        let date = CalendarDate::from_ymd(2024, 6, 28).unwrap();
        assert_eq!(
            date.plus_days(3).unwrap(),
            CalendarDate::from_ymd(2024, 7, 1).unwrap()
        );
    }

    #[test]
    fn long_format_should_use_french_month_names() {
        let date = CalendarDate::from_ymd(2024, 6, 10).unwrap();
        assert_eq!(date.long_format(), "10 juin 2024");

        let date = CalendarDate::from_ymd(2024, 12, 25).unwrap();
        assert_eq!(date.long_format(), "25 décembre 2024");
    }
}
