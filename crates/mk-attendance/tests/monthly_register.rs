//! End-to-end flow of the monthly register: enumerate school days,
//! deserialize per-day backend payloads, fold them into the matrix, and
//! derive the labels and statistics the export sheets consume.

use mk_attendance::{AttendanceStatus, DailyClassSummary, MonthStatistics, MonthlyMatrix};
use mk_time::{format_solar_hijri, solar_hijri_month_name, Date, MonthSchedule, SixDayWeek, Weekday};

fn day_payload(date: &str, students: &[(&str, &str, &str)]) -> (Date, DailyClassSummary) {
    let records: Vec<String> = students
        .iter()
        .map(|(id, name, status)| {
            format!(
                r#"{{"studentId": "{id}", "studentName": "{name}", "status": "{status}"}}"#
            )
        })
        .collect();
    let present = students.iter().filter(|(_, _, s)| *s == "PRESENT").count();
    let absent = students.iter().filter(|(_, _, s)| *s == "ABSENT").count();
    let late = students.iter().filter(|(_, _, s)| *s == "LATE").count();
    let json = format!(
        r#"{{"totalStudents": {}, "present": {present}, "absent": {absent}, "late": {late}, "students": [{}]}}"#,
        students.len(),
        records.join(",")
    );
    (
        date.parse().unwrap(),
        serde_json::from_str(&json).unwrap(),
    )
}

#[test]
fn march_2024_register() {
    // The caller would issue one query per school day of March 2024; the
    // schedule excludes the five Fridays.
    let schedule = MonthSchedule::for_month(2024, 3, &SixDayWeek).unwrap();
    assert_eq!(schedule.len(), 26);
    assert!(schedule
        .dates()
        .iter()
        .all(|d| d.weekday() != Weekday::Friday));

    // Three days came back with data, one empty, the rest failed and are
    // simply missing from the fold input.
    let days = vec![
        day_payload(
            "2024-03-04",
            &[
                ("st-01", "Ahmad Rahimi", "PRESENT"),
                ("st-02", "Maryam Qaderi", "ABSENT"),
            ],
        ),
        day_payload(
            "2024-03-02",
            &[
                ("st-01", "Ahmad Rahimi", "PRESENT"),
                ("st-02", "Maryam Qaderi", "PRESENT"),
            ],
        ),
        day_payload("2024-03-05", &[]),
        day_payload("2024-03-03", &[("st-01", "Ahmad Rahimi", "LATE")]),
    ];

    let matrix =
        MonthlyMatrix::from_daily_results(days.iter().map(|(d, s)| (*d, s.students.clone())));

    // The axis is chronological regardless of arrival order, and the
    // empty 5th is not on it.
    let axis: Vec<String> = matrix.dates().iter().map(|d| d.to_string()).collect();
    assert_eq!(axis, ["2024-03-02", "2024-03-03", "2024-03-04"]);

    let ahmad = matrix.student("st-01").unwrap();
    assert_eq!(ahmad.recorded_days(), 3);
    let totals = ahmad.totals();
    assert_eq!((totals.present, totals.late), (2, 1));
    assert!((ahmad.attendance_rate() - 200.0 / 3.0).abs() < 1e-9);

    let maryam = matrix.student("st-02").unwrap();
    assert_eq!(maryam.recorded_days(), 2);
    assert_eq!(
        maryam
            .entry("2024-03-04".parse().unwrap())
            .unwrap()
            .status,
        AttendanceStatus::Absent
    );

    // Column labels for the localized register header.
    let labels: Vec<String> = matrix
        .dates()
        .iter()
        .map(|d| format!("{} {}", format_solar_hijri(*d), d.weekday().dari_name()))
        .collect();
    assert_eq!(labels[0], "1402/12/12 شنبه");
    assert_eq!(solar_hijri_month_name(matrix.dates()[0]), "حوت");

    // Overview-sheet statistics over the fetched day summaries.
    let stats = MonthStatistics::from_summaries(days.iter().map(|(_, s)| s));
    assert_eq!(stats.school_days, 4);
    // 3 present, 1 absent, 1 late across the month.
    assert!((stats.present_rate - 60.0).abs() < 1e-9);
    // Daily rates: 50 %, 100 %, 0 % (empty day), 0 % (late-only day).
    assert!((stats.average_attendance_rate - 37.5).abs() < 1e-9);
}
