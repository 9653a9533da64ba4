//! `MonthlyMatrix` — the per-student × per-day attendance matrix for one
//! month.
//!
//! The caller fetches one [`DailyClassSummary`](crate::record::DailyClassSummary)
//! per school day (typically as a concurrent fan-out) and folds the
//! results here. Everything is keyed by explicit [`Date`] and student id,
//! never by sequence position, so the matrix comes out identical no
//! matter what order the day results arrive in — including a partial
//! set when some fetches failed.

use crate::record::AttendanceRecord;
use crate::status::AttendanceStatus;
use crate::summary::AttendanceTotals;
use mk_core::{Rate, Timeline};
use mk_time::Date;
use std::collections::{BTreeMap, BTreeSet};

/// What the matrix retains for one student on one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEntry {
    /// Recorded status.
    pub status: AttendanceStatus,
    /// Clock-in time, if recorded.
    pub in_time: Option<String>,
    /// Clock-out time, if recorded.
    pub out_time: Option<String>,
}

impl From<&AttendanceRecord> for DayEntry {
    fn from(record: &AttendanceRecord) -> Self {
        Self {
            status: record.status,
            in_time: record.in_time.clone(),
            out_time: record.out_time.clone(),
        }
    }
}

/// One student's row of the matrix: identity plus day entries.
///
/// Identity fields are carried over from the first record seen for the
/// student in the month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentMonthRecord {
    /// Backend identifier for the student.
    pub student_id: String,
    /// The student's name in Latin script.
    pub student_name: String,
    /// The student's Dari name, when the roster has one.
    pub dari_name: Option<String>,
    /// Class roll number, when assigned.
    pub roll_number: Option<String>,
    days: Timeline<Date, DayEntry>,
}

impl StudentMonthRecord {
    fn from_first_sight(record: &AttendanceRecord) -> Self {
        Self {
            student_id: record.student_id.clone(),
            student_name: record.student_name.clone(),
            dari_name: record.dari_name.clone(),
            roll_number: record.roll_number.clone(),
            days: Timeline::new(),
        }
    }

    /// This student's day entries, in date order.
    pub fn days(&self) -> &Timeline<Date, DayEntry> {
        &self.days
    }

    /// The entry for one date, or `None` if the day holds no record for
    /// this student.
    pub fn entry(&self, date: Date) -> Option<&DayEntry> {
        self.days.get(&date)
    }

    /// Number of days with a record for this student.
    pub fn recorded_days(&self) -> usize {
        self.days.len()
    }

    /// Status counts across the month, derived on demand.
    pub fn totals(&self) -> AttendanceTotals {
        let mut totals = AttendanceTotals::default();
        for entry in self.days.values() {
            totals.tally(entry.status);
        }
        totals
    }

    /// This student's attendance rate for the month.
    pub fn attendance_rate(&self) -> Rate {
        self.totals().attendance_rate()
    }

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

/// The per-student × per-day matrix for one (class, month) query.
///
/// Built fresh per query, never mutated afterwards. The date axis holds
/// exactly the dates whose response carried at least one student record;
/// a day the backend had no data for is omitted entirely rather than
/// rendered as all-absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonthlyMatrix {
    students: BTreeMap<String, StudentMonthRecord>,
    dates: Vec<Date>,
}

impl MonthlyMatrix {
    /// Fold per-day query results into a matrix.
    ///
    /// Accepts the day results in any order and tolerates gaps; a date
    /// paired with an empty record list contributes nothing. For each
    /// student, the first record seen supplies the identity fields and
    /// every record lands under its own date; should one day somehow
    /// carry two records for a student, the last one wins.
    pub fn from_daily_results<I>(days: I) -> Self
    where
        I: IntoIterator<Item = (Date, Vec<AttendanceRecord>)>,
    {
        let mut students: BTreeMap<String, StudentMonthRecord> = BTreeMap::new();
        let mut dates: BTreeSet<Date> = BTreeSet::new();
        for (date, records) in days {
            if records.is_empty() {
                continue;
            }
            dates.insert(date);
            for record in &records {
                let row = students
                    .entry(record.student_id.clone())
                    .or_insert_with(|| StudentMonthRecord::from_first_sight(record));
                row.days.insert(date, DayEntry::from(record));
            }
        }
        Self {
            students,
            dates: dates.into_iter().collect(),
        }
    }

    /// The date axis: every date with at least one record, ascending.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// All student rows, in ascending student-id order.
    pub fn students(&self) -> impl Iterator<Item = &StudentMonthRecord> {
        self.students.values()
    }

    /// Look up one student's row.
    pub fn student(&self, student_id: &str) -> Option<&StudentMonthRecord> {
        self.students.get(student_id)
    }

    /// Number of students appearing in the month.
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Whether the month holds no data at all.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty() && self.dates.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn record(id: &str, name: &str, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            student_id: id.into(),
            student_name: name.into(),
            dari_name: None,
            roll_number: None,
            status,
            in_time: None,
            out_time: None,
        }
    }

    #[test]
    fn every_student_and_date_lands_once() {
        let d1 = date(2024, 3, 2);
        let d2 = date(2024, 3, 3);
        let d3 = date(2024, 3, 4);
        let matrix = MonthlyMatrix::from_daily_results([
            (
                d1,
                vec![
                    record("st-01", "Ahmad", AttendanceStatus::Present),
                    record("st-02", "Maryam", AttendanceStatus::Absent),
                ],
            ),
            (d2, vec![record("st-01", "Ahmad", AttendanceStatus::Late)]),
            (
                d3,
                vec![
                    record("st-01", "Ahmad", AttendanceStatus::Present),
                    record("st-02", "Maryam", AttendanceStatus::Present),
                ],
            ),
        ]);

        assert_eq!(matrix.dates(), &[d1, d2, d3]);
        assert_eq!(matrix.student_count(), 2);
        let ahmad = matrix.student("st-01").unwrap();
        assert_eq!(ahmad.recorded_days(), 3);
        assert_eq!(ahmad.entry(d2).unwrap().status, AttendanceStatus::Late);
        let maryam = matrix.student("st-02").unwrap();
        assert_eq!(maryam.recorded_days(), 2);
        assert_eq!(maryam.entry(d2), None);
    }

    #[test]
    fn empty_days_stay_off_the_date_axis() {
        let d1 = date(2024, 3, 2);
        let empty = date(2024, 3, 3);
        let d3 = date(2024, 3, 4);
        let matrix = MonthlyMatrix::from_daily_results([
            (d1, vec![record("st-01", "Ahmad", AttendanceStatus::Present)]),
            (empty, vec![]),
            (d3, vec![record("st-01", "Ahmad", AttendanceStatus::Absent)]),
        ]);

        assert_eq!(matrix.dates(), &[d1, d3]);
        // No phantom entry for the empty day.
        assert_eq!(matrix.student("st-01").unwrap().entry(empty), None);
    }

    #[test]
    fn arrival_order_does_not_matter() {
        let d1 = date(2024, 3, 2);
        let d2 = date(2024, 3, 3);
        let d3 = date(2024, 3, 4);
        let day = |d: Date, s: AttendanceStatus| (d, vec![record("st-01", "Ahmad", s)]);

        let in_order = MonthlyMatrix::from_daily_results([
            day(d1, AttendanceStatus::Present),
            day(d2, AttendanceStatus::Absent),
            day(d3, AttendanceStatus::Late),
        ]);
        let scrambled = MonthlyMatrix::from_daily_results([
            day(d3, AttendanceStatus::Late),
            day(d1, AttendanceStatus::Present),
            day(d2, AttendanceStatus::Absent),
        ]);
        assert_eq!(in_order, scrambled);
        assert_eq!(in_order.dates(), &[d1, d2, d3]);
    }

    #[test]
    fn identity_comes_from_first_sight() {
        let d1 = date(2024, 3, 2);
        let d2 = date(2024, 3, 3);
        let mut first = record("st-01", "Ahmad", AttendanceStatus::Present);
        first.dari_name = Some("احمد".into());
        first.roll_number = Some("7".into());
        let later = record("st-01", "Ahmad R.", AttendanceStatus::Absent);

        let matrix = MonthlyMatrix::from_daily_results([(d1, vec![first]), (d2, vec![later])]);
        let row = matrix.student("st-01").unwrap();
        assert_eq!(row.student_name, "Ahmad");
        assert_eq!(row.dari_name.as_deref(), Some("احمد"));
        assert_eq!(row.roll_number.as_deref(), Some("7"));
        assert_eq!(row.display_name(true), "احمد");
        // Both day entries are still present.
        assert_eq!(row.recorded_days(), 2);
    }

    #[test]
    fn duplicate_records_for_a_day_keep_the_last() {
        let d1 = date(2024, 3, 2);
        let matrix = MonthlyMatrix::from_daily_results([(
            d1,
            vec![
                record("st-01", "Ahmad", AttendanceStatus::Absent),
                record("st-01", "Ahmad", AttendanceStatus::Present),
            ],
        )]);
        let row = matrix.student("st-01").unwrap();
        assert_eq!(row.recorded_days(), 1);
        assert_eq!(row.entry(d1).unwrap().status, AttendanceStatus::Present);
    }

    #[test]
    fn totals_and_rate() {
        // 18 present, 2 absent over 20 recorded days: 90 %.
        let mut days = Vec::new();
        for day in 1..=18u8 {
            days.push((
                date(2024, 10, day),
                vec![record("st-01", "Ahmad", AttendanceStatus::Present)],
            ));
        }
        for day in 19..=20u8 {
            days.push((
                date(2024, 10, day),
                vec![record("st-01", "Ahmad", AttendanceStatus::Absent)],
            ));
        }
        let matrix = MonthlyMatrix::from_daily_results(days);
        let row = matrix.student("st-01").unwrap();
        let totals = row.totals();
        assert_eq!((totals.present, totals.absent, totals.late), (18, 2, 0));
        assert_relative_eq!(row.attendance_rate(), 90.0);
    }

    #[test]
    fn excused_and_half_day_stay_out_of_the_rate() {
        let days = [
            (date(2024, 10, 1), AttendanceStatus::Present),
            (date(2024, 10, 2), AttendanceStatus::Excused),
            (date(2024, 10, 3), AttendanceStatus::HalfDay),
            (date(2024, 10, 5), AttendanceStatus::Absent),
        ]
        .map(|(d, s)| (d, vec![record("st-01", "Ahmad", s)]));
        let matrix = MonthlyMatrix::from_daily_results(days);
        let row = matrix.student("st-01").unwrap();
        let totals = row.totals();
        assert_eq!(totals.excused, 1);
        assert_eq!(totals.half_day, 1);
        assert_eq!(totals.recorded(), 2);
        assert_relative_eq!(row.attendance_rate(), 50.0);
    }

    #[test]
    fn empty_input_gives_an_empty_matrix() {
        let matrix =
            MonthlyMatrix::from_daily_results(std::iter::empty::<(Date, Vec<AttendanceRecord>)>());
        assert!(matrix.is_empty());
        assert_eq!(matrix.dates(), &[] as &[Date]);
        assert_eq!(matrix.student_count(), 0);
    }
}
