//! `SchoolCalendar` trait and concrete school-week implementations.
//!
//! A school calendar knows which calendar days hold classes. Afghan
//! schools run a six-day week closed on Friday; the trait leaves room
//! for other weekly closures.

use crate::date::Date;
use crate::weekday::Weekday;

/// A school-week calendar.
pub trait SchoolCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Six-day week"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a school day in this calendar.
    fn is_school_day(&self, date: Date) -> bool;

    /// Return `true` if the school is closed on `date`.
    fn is_closed(&self, date: Date) -> bool {
        !self.is_school_day(date)
    }
}

/// The standard Afghan school week: closed on Friday, open Saturday
/// through Thursday.
#[derive(Debug, Clone, Copy, Default)]
pub struct SixDayWeek;

impl SchoolCalendar for SixDayWeek {
    fn name(&self) -> &str {
        "Six-day week"
    }

    fn is_school_day(&self, date: Date) -> bool {
        date.weekday() != Weekday::Friday
    }
}

/// A school week closed on one configurable weekday.
#[derive(Debug, Clone, Copy)]
pub struct WeeklyClosure {
    closed: Weekday,
}

impl WeeklyClosure {
    /// Create a calendar closed on the given weekday.
    pub fn new(closed: Weekday) -> Self {
        Self { closed }
    }

    /// The weekday the school is closed on.
    pub fn closed_weekday(&self) -> Weekday {
        self.closed
    }
}

impl SchoolCalendar for WeeklyClosure {
    fn name(&self) -> &str {
        "Weekly closure"
    }

    fn is_school_day(&self, date: Date) -> bool {
        date.weekday() != self.closed
    }
}

/// A calendar with no closures — every day is a school day.
///
/// Useful as test scaffolding.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenEveryDay;

impl SchoolCalendar for OpenEveryDay {
    fn name(&self) -> &str {
        "Open every day"
    }

    fn is_school_day(&self, _date: Date) -> bool {
        true
    }
}
