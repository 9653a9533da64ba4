//! # mk-time
//!
//! Gregorian dates, Solar Hijri (Afghan) calendar conversion, and
//! school-week calendars.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `SchoolCalendar` trait and school-week implementations.
pub mod calendar;

/// `Date` type.
pub mod date;

/// `HijriMonth` — Solar Hijri month of the year.
pub mod hijri_month;

/// `MonthSchedule` — the school dates of one month.
pub mod schedule;

/// Gregorian → Solar Hijri conversion and formatting.
pub mod solar_hijri;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{OpenEveryDay, SchoolCalendar, SixDayWeek, WeeklyClosure};
pub use date::Date;
pub use hijri_month::HijriMonth;
pub use schedule::MonthSchedule;
pub use solar_hijri::{format_solar_hijri, solar_hijri_month_name, SolarHijriDate};
pub use weekday::Weekday;
