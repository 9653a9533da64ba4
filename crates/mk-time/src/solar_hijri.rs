//! Gregorian → Solar Hijri (Afghan) calendar conversion.
//!
//! The Afghan civil year begins at the March equinox; the upstream school
//! system pins each of the twelve months to a fixed Gregorian start date
//! (Hamal on March 21, Sawr on April 21, and so on). A date's Afghan
//! month is the entry with the latest start not after it, and the day is
//! the serial-day offset from that start plus one. Month lengths fall out
//! of consecutive boundary differences: the first six months have 31
//! days, Mizan through Dalw 30, and Hoot 29 or 30 depending on where the
//! Gregorian leap day lands. No separate Afghan leap-year rule exists in
//! this scheme.

use crate::date::{serial_from_ymd, Date};
use crate::hijri_month::HijriMonth;

/// Gregorian start date (month, day) of each Solar Hijri month.
struct MonthStart {
    month: HijriMonth,
    greg_month: u8,
    greg_day: u8,
}

/// The twelve fixed month boundaries, Hamal through Hoot. The last two
/// start in the following Gregorian year.
const MONTH_STARTS: [MonthStart; 12] = [
    MonthStart { month: HijriMonth::Hamal, greg_month: 3, greg_day: 21 },
    MonthStart { month: HijriMonth::Sawr, greg_month: 4, greg_day: 21 },
    MonthStart { month: HijriMonth::Jawza, greg_month: 5, greg_day: 22 },
    MonthStart { month: HijriMonth::Saratan, greg_month: 6, greg_day: 22 },
    MonthStart { month: HijriMonth::Asad, greg_month: 7, greg_day: 23 },
    MonthStart { month: HijriMonth::Sonbola, greg_month: 8, greg_day: 23 },
    MonthStart { month: HijriMonth::Mizan, greg_month: 9, greg_day: 23 },
    MonthStart { month: HijriMonth::Aqrab, greg_month: 10, greg_day: 23 },
    MonthStart { month: HijriMonth::Qaws, greg_month: 11, greg_day: 22 },
    MonthStart { month: HijriMonth::Jadi, greg_month: 12, greg_day: 22 },
    MonthStart { month: HijriMonth::Dalw, greg_month: 1, greg_day: 21 },
    MonthStart { month: HijriMonth::Hoot, greg_month: 2, greg_day: 20 },
];

/// A date in the Solar Hijri (Afghan) calendar.
///
/// Derived deterministically from a Gregorian [`Date`]; never mutated
/// after construction. Invariant: `1 <= day <= 31`, and at most 30 for
/// Mizan onward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolarHijriDate {
    /// Solar Hijri year.
    pub year: i32,
    /// Month, Hamal = 1 … Hoot = 12.
    pub month: HijriMonth,
    /// Day of the month, 1–31.
    pub day: u8,
}

impl SolarHijriDate {
    /// Convert a Gregorian date.
    ///
    /// Total over the valid [`Date`] range; pure, with no side effects.
    /// Dates on a month boundary land on day 1 of the new month, and
    /// Gregorian January/February dates resolve into the tail months of
    /// the previous Afghan year.
    pub fn from_gregorian(date: Date) -> Self {
        let gy = date.year();
        let gm = date.month();
        let gd = date.day_of_month();

        // Gregorian year in which the enclosing Afghan year began.
        let base_year = if (gm, gd) >= (3, 21) { gy } else { gy - 1 };

        // Latest month boundary not after the date. The Hamal boundary of
        // `base_year` is never after it, so the fold always matches.
        let hamal = &MONTH_STARTS[0];
        let mut month = hamal.month;
        let mut start = serial_from_ymd(base_year, hamal.greg_month, hamal.greg_day);
        for entry in MONTH_STARTS.iter().skip(1) {
            let boundary_year = if entry.greg_month >= 3 {
                base_year
            } else {
                base_year + 1
            };
            let s = serial_from_ymd(boundary_year, entry.greg_month, entry.greg_day);
            if s > date.serial() {
                break;
            }
            month = entry.month;
            start = s;
        }

        SolarHijriDate {
            year: base_year as i32 - 621,
            month,
            day: (date.serial() - start + 1) as u8,
        }
    }

    /// Return the Dari month name (`"حمل"` for Hamal, …).
    pub fn month_name(&self) -> &'static str {
        self.month.dari_name()
    }
}

impl std::fmt::Display for SolarHijriDate {
    /// `"{year}/{month:02}/{day:02}"`, e.g. `"1403/01/01"`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{:02}/{:02}", self.year, self.month.number(), self.day)
    }
}

/// Format a Gregorian date in Solar Hijri `y/mm/dd` form.
pub fn format_solar_hijri(date: Date) -> String {
    SolarHijriDate::from_gregorian(date).to_string()
}

/// Return the Dari name of the Solar Hijri month containing a Gregorian
/// date.
pub fn solar_hijri_month_name(date: Date) -> &'static str {
    SolarHijriDate::from_gregorian(date).month_name()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
