//! REST payload types for the per-day class attendance query.
//!
//! The backend answers `/attendances/class-summary` once per school day
//! with headline counts and one record per student, camelCase fields,
//! several of them optional. Everything optional defaults so a sparse
//! payload still deserializes.

use crate::status::AttendanceStatus;
use mk_core::Rate;
use serde::{Deserialize, Serialize};

/// One student's attendance on one calendar day, as the backend reports
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// Backend identifier for the student.
    pub student_id: String,
    /// The student's name in Latin script.
    pub student_name: String,
    /// The student's Dari name, when the roster has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dari_name: Option<String>,
    /// Class roll number, when assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roll_number: Option<String>,
    /// Recorded status; a missing status means absent.
    #[serde(default)]
    pub status: AttendanceStatus,
    /// Clock-in time, when the gate recorded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_time: Option<String>,
    /// Clock-out time, when the gate recorded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_time: Option<String>,
}

impl AttendanceRecord {
    /// The name to display: the Dari name when requested and present,
    /// falling back to the Latin-script name.
    pub fn display_name(&self, use_dari: bool) -> &str {
        if use_dari {
            if let Some(name) = &self.dari_name {
                return name;
            }
        }
        &self.student_name
    }
}

/// The per-day class summary payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DailyClassSummary {
    /// Students enrolled in the class on this day.
    #[serde(default)]
    pub total_students: u32,
    /// Students marked present.
    #[serde(default)]
    pub present: u32,
    /// Students marked absent.
    #[serde(default)]
    pub absent: u32,
    /// Students marked late.
    #[serde(default)]
    pub late: u32,
    /// Per-student records; may be empty when the day holds no data.
    #[serde(default)]
    pub students: Vec<AttendanceRecord>,
}

impl DailyClassSummary {
    /// The day's class attendance rate: present over enrolled, as a
    /// percentage. `0.0` when the class is empty.
    pub fn attendance_rate(&self) -> Rate {
        if self.total_students == 0 {
            return 0.0;
        }
        self.present as Rate / self.total_students as Rate * 100.0
    }
}
