//! `AttendanceStatus` — a student's recorded status for one school day.

use serde::{Deserialize, Serialize};

/// Attendance status for one student on one school day.
///
/// The backend serializes these as upper-case strings (`"PRESENT"`,
/// `"HALF_DAY"`, …). A record arriving without a status is treated as
/// absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    /// Present and on time.
    Present,
    /// Absent for the day.
    #[default]
    Absent,
    /// Arrived late.
    Late,
    /// Absence excused by the school.
    Excused,
    /// Present for part of the day.
    HalfDay,
}

impl AttendanceStatus {
    /// Whether this status enters the attendance-rate denominator.
    ///
    /// The rate counts present against present + absent + late; excused
    /// and half-day records are tracked but never affect the percentage.
    pub fn counts_toward_rate(&self) -> bool {
        matches!(
            self,
            AttendanceStatus::Present | AttendanceStatus::Absent | AttendanceStatus::Late
        )
    }
}
