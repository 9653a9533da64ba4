//! # maktab
//!
//! Solar Hijri calendar conversion and monthly attendance aggregation
//! for Afghan school management.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `mk-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! maktab = "0.1"
//! ```
//!
//! ```rust
//! use maktab::time::{format_solar_hijri, Date, MonthSchedule, SixDayWeek};
//!
//! // Nawruz 1403 — the first day of the Afghan year.
//! let nawruz = Date::from_ymd(2024, 3, 21).unwrap();
//! assert_eq!(format_solar_hijri(nawruz), "1403/01/01");
//!
//! // The school days of that month, Fridays excluded.
//! let schedule = MonthSchedule::for_month(2024, 3, &SixDayWeek).unwrap();
//! assert_eq!(schedule.len(), 26);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types, the `Rate` alias, and shared containers.
pub use mk_core as core;

/// Dates, Solar Hijri conversion, and school calendars.
pub use mk_time as time;

/// Attendance records, the monthly matrix, and derived statistics.
pub use mk_attendance as attendance;
