//! Derived totals and month-level statistics.
//!
//! Nothing here is stored on the matrix; every number is recomputed from
//! the underlying records on demand.

use crate::matrix::MonthlyMatrix;
use crate::record::DailyClassSummary;
use crate::status::AttendanceStatus;
use mk_core::Rate;
use mk_time::Date;

/// Status counts for one student-month or one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttendanceTotals {
    /// Days marked present.
    pub present: u32,
    /// Days marked absent.
    pub absent: u32,
    /// Days marked late.
    pub late: u32,
    /// Days marked excused.
    pub excused: u32,
    /// Days marked half-day.
    pub half_day: u32,
}

impl AttendanceTotals {
    /// Count one status.
    pub fn tally(&mut self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::Present => self.present += 1,
            AttendanceStatus::Absent => self.absent += 1,
            AttendanceStatus::Late => self.late += 1,
            AttendanceStatus::Excused => self.excused += 1,
            AttendanceStatus::HalfDay => self.half_day += 1,
        }
    }

    /// Days entering the rate denominator: present + absent + late.
    pub fn recorded(&self) -> u32 {
        self.present + self.absent + self.late
    }

    /// Present days over recorded days, as a percentage. `0.0` when
    /// nothing was recorded.
    pub fn attendance_rate(&self) -> Rate {
        let recorded = self.recorded();
        if recorded == 0 {
            return 0.0;
        }
        self.present as Rate / recorded as Rate * 100.0
    }
}

impl MonthlyMatrix {
    /// Status counts across all students for one date.
    ///
    /// A date off the matrix's axis simply yields zero counts.
    pub fn day_totals(&self, date: Date) -> AttendanceTotals {
        let mut totals = AttendanceTotals::default();
        for student in self.students() {
            if let Some(entry) = student.entry(date) {
                totals.tally(entry.status);
            }
        }
        totals
    }
}

/// Month-level headline numbers for the overview report.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthStatistics {
    /// Number of school days the summaries cover.
    pub school_days: usize,
    /// Share of present marks among present + absent + late, in percent.
    pub present_rate: Rate,
    /// Share of absent marks among present + absent + late, in percent.
    pub absent_rate: Rate,
    /// Share of late marks among present + absent + late, in percent.
    pub late_rate: Rate,
    /// Mean of the per-day class attendance rates, in percent.
    pub average_attendance_rate: Rate,
}

impl MonthStatistics {
    /// Compute the overview numbers from per-day class summaries.
    ///
    /// Days the backend failed for are conventionally passed as default
    /// (all-zero) summaries; they count toward the school-day total and
    /// pull the average down, matching the report this feeds.
    pub fn from_summaries<'a, I>(summaries: I) -> Self
    where
        I: IntoIterator<Item = &'a DailyClassSummary>,
    {
        let mut school_days = 0usize;
        let mut present = 0u64;
        let mut absent = 0u64;
        let mut late = 0u64;
        let mut rate_sum: Rate = 0.0;
        for day in summaries {
            school_days += 1;
            present += day.present as u64;
            absent += day.absent as u64;
            late += day.late as u64;
            rate_sum += day.attendance_rate();
        }

        let recorded = present + absent + late;
        let share = |n: u64| {
            if recorded == 0 {
                0.0
            } else {
                n as Rate / recorded as Rate * 100.0
            }
        };
        MonthStatistics {
            school_days,
            present_rate: share(present),
            absent_rate: share(absent),
            late_rate: share(late),
            average_attendance_rate: if school_days == 0 {
                0.0
            } else {
                rate_sum / school_days as Rate
            },
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
