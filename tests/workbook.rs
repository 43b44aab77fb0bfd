// tests/workbook.rs
//
// Workbook input through calamine. The fixture has an empty row 1 and an
// empty column A, like a sheet whose serial column was never filled in:
//
//   "School Timetable":  B2 NAME | D2 SUBJECT | E2 MON 1 | F2 MON 2
//                        B3 MR MOHAPATRA | D3 MATHEMATICS | E3 IX B | F3 VI A
//                        B4 MS DAS       | D4 LAB         |         | F4 vi a
//   "Notes":             A1 text, B1 number
//
use std::path::{Path, PathBuf};

use school_timetable::cache::ScheduleCache;
use school_timetable::config::options::{AppOptions, ParseOptions};
use school_timetable::source::load_table;
use school_timetable::{parse_schedule, project_class_grid, ClassId, TimetableError};

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/blank_column_a.xlsx")
}

#[test]
fn blank_column_a_keeps_sheet_offsets() {
    let t = load_table(&fixture(), "School Timetable").unwrap();
    assert_eq!(t.rows[0].len(), 0);
    assert_eq!(t.rows[2][0], None);
    assert_eq!(t.rows[2][1].as_deref(), Some("MR MOHAPATRA"));
    assert_eq!(t.rows[2][3].as_deref(), Some("MATHEMATICS"));
    assert_eq!(t.rows[2][4].as_deref(), Some("IX B"));

    let s = parse_schedule(&t, &ParseOptions::default()).unwrap();
    let names: Vec<&str> = s.teachers().iter().map(|t| t.name()).collect();
    assert_eq!(names, ["MR MOHAPATRA", "MS DAS"]);
    let classes: Vec<&str> = s.classes().iter().map(ClassId::as_str).collect();
    assert_eq!(classes, ["IXB", "VIA"]);

    let a = s.teachers()[0].assignments();
    assert_eq!(a[0], ClassId::parse("IXB"));
    assert_eq!(a[1], ClassId::parse("VIA"));

    let g = project_class_grid(&s);
    assert_eq!(g.subjects(&ClassId::parse("VIA").unwrap(), 1), ["MATHEMATICS", "LAB"]);
}

#[test]
fn sheet_name_matches_in_any_case() {
    // default sheet name is "SCHOOL TIMETABLE"; the workbook says "School Timetable"
    let t = load_table(&fixture(), &ParseOptions::default().sheet).unwrap();
    assert_eq!(t.nrows(), 4);

    let notes = load_table(&fixture(), "notes").unwrap();
    assert_eq!(notes.rows[0][0].as_deref(), Some("Prepared by the office"));
    assert_eq!(notes.rows[0][1].as_deref(), Some("2024"));
}

#[test]
fn missing_sheet_lists_what_is_there() {
    let err = load_table(&fixture(), "Timetable 2025").unwrap_err();
    match err {
        TimetableError::SheetNotFound { sheet, available } => {
            assert_eq!(sheet, "Timetable 2025");
            assert_eq!(available, ["School Timetable", "Notes"]);
        }
        other => panic!("expected SheetNotFound, got {other:?}"),
    }
}

#[test]
fn runner_reads_the_workbook_once_and_caches_it() {
    let mut opts = AppOptions::default();
    opts.input = fixture();

    let mut cache = ScheduleCache::new();
    let first = school_timetable::runner::load_schedule(&opts, &mut cache).unwrap();
    let again = school_timetable::runner::load_schedule(&opts, &mut cache).unwrap();
    assert_eq!(first.teachers().len(), 2);
    assert_eq!(first, again);
    assert_eq!(cache.hits(), 1);
}
