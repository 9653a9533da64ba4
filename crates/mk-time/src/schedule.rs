//! `MonthSchedule` — the school dates of one Gregorian month.
//!
//! The monthly attendance flow issues one backend query per school day;
//! this type produces that date list: every day of the month whose
//! weekday the calendar keeps, in ascending order.

use crate::calendar::SchoolCalendar;
use crate::date::{days_in_month, Date};
use mk_core::ensure;
use mk_core::errors::Result;

/// The ordered school dates of a single Gregorian month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSchedule {
    year: u16,
    month: u8,
    dates: Vec<Date>,
}

impl MonthSchedule {
    /// Enumerate the school days of `year`/`month` under `calendar`.
    pub fn for_month(year: u16, month: u8, calendar: &dyn SchoolCalendar) -> Result<Self> {
        ensure!((1..=12).contains(&month), "month {month} out of range [1, 12]");
        let mut dates = Vec::new();
        for day in 1..=days_in_month(year, month) {
            let date = Date::from_ymd(year, month, day)?;
            if calendar.is_school_day(date) {
                dates.push(date);
            }
        }
        Ok(Self { year, month, dates })
    }

    /// The Gregorian year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// The Gregorian month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// All school dates in ascending order.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Number of school dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the month has no school dates.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The first school date, or `None` if the month has none.
    pub fn first_date(&self) -> Option<Date> {
        self.dates.first().copied()
    }

    /// The last school date, or `None` if the month has none.
    pub fn last_date(&self) -> Option<Date> {
        self.dates.last().copied()
    }
}

impl<'a> IntoIterator for &'a MonthSchedule {
    type Item = &'a Date;
    type IntoIter = std::slice::Iter<'a, Date>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.iter()
    }
}
