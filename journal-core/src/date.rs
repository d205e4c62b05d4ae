use std::fmt;

#[cfg(feature = "chrono")]
use std::convert::TryFrom;

#[cfg(feature = "chrono")]
use chrono::{Datelike, NaiveDate};

/// A calendar date as written in the journal.
///
/// Only the ranges of month (1 to 12) and day (1 to 31) are checked by the parser; no calendar
/// validation happens, so `2016/02/30` is a valid `Date`.  Two-digit years are kept as written.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl Date {
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Date { year, month, day }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 100 {
            write!(f, "{:02}", self.year)?;
        } else {
            write!(f, "{:04}", self.year)?;
        }
        write!(f, "/{:02}/{:02}", self.month, self.day)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<Date> for NaiveDate {
    type Error = ();

    fn try_from(date: Date) -> Result<Self, Self::Error> {
        NaiveDate::from_ymd_opt(date.year.into(), date.month.into(), date.day.into()).ok_or(())
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<NaiveDate> for Date {
    type Error = ();

    fn try_from(d: NaiveDate) -> Result<Self, Self::Error> {
        let year = u16::try_from(d.year()).map_err(|_| ())?;
        Ok(Date::new(year, d.month() as u8, d.day() as u8))
    }
}

#[test]
fn test_date_display() {
    assert_eq!(Date::new(2016, 1, 3).to_string(), "2016/01/03");
    assert_eq!(Date::new(14, 1, 31).to_string(), "14/01/31");
    assert_eq!(Date::new(5, 1, 31).to_string(), "05/01/31");
}

#[cfg(feature = "chrono")]
#[test]
fn test_date_chrono() {
    assert_eq!(
        NaiveDate::try_from(Date::new(2020, 5, 5)),
        Ok(NaiveDate::from_ymd_opt(2020, 5, 5).unwrap())
    );
    assert!(NaiveDate::try_from(Date::new(2016, 2, 30)).is_err());
    assert_eq!(
        Date::try_from(NaiveDate::from_ymd_opt(2020, 5, 5).unwrap()),
        Ok(Date::new(2020, 5, 5))
    );
}
