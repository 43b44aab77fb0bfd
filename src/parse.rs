// src/parse.rs
//! # Row parser
//!
//! Turns the raw timetable sheet into teacher records.
//!
//! Expected layout (0-indexed columns, all configurable through [`ParseOptions`]):
//! ```text
//! 0: serial (unused) | 1: name | 2: (unused) | 3: subject | 4..=51: 48 period cells
//! ```
//! Period cells run MON P1..P8, TUE P1..P8, … SAT P8.
//!
//! Rows that don't look like a teacher (blank, separator, the `NAME` header) are
//! skipped, not reported. Period cells that don't normalize to a class are free
//! periods. Only a sheet too narrow to hold the name column is an error.

use std::collections::BTreeSet;

use log::{debug, info, warn};

use crate::config::options::ParseOptions;
use crate::core::normalize::normalize_class;
use crate::core::sanitize::{normalize_ws, take_chars};
use crate::error::{Result, TimetableError};
use crate::schedule::{ClassId, Schedule, TeacherRecord};
use crate::table::{cell, RawTable};

/// Parser output before it is sealed into a [`Schedule`].
#[derive(Clone, Debug, Default)]
pub struct ParsedRows {
    pub teachers: Vec<TeacherRecord>,
    pub classes: BTreeSet<ClassId>,
    /// Rows that failed the teacher-row test.
    pub skipped: usize,
}

/// Parse the sheet and build the schedule.
/// An empty schedule is not an error; check [`Schedule::status`].
pub fn parse_schedule(table: &RawTable, opts: &ParseOptions) -> Result<Schedule> {
    let parsed = parse_rows(table, opts)?;
    let schedule = Schedule::build(parsed.teachers, parsed.classes);

    if schedule.is_empty() {
        warn!(
            "No teacher rows in {} row(s) of sheet '{}'; check the sheet name and column layout",
            table.nrows(), opts.sheet
        );
    } else {
        info!(
            "Parsed {} teacher(s), {} class(es); skipped {} row(s)",
            schedule.teachers().len(), schedule.classes().len(), parsed.skipped
        );
    }
    Ok(schedule)
}

/// Scan every row, keeping teacher rows in input order.
pub fn parse_rows(table: &RawTable, opts: &ParseOptions) -> Result<ParsedRows> {
    let required = opts.name_col + 1;
    let columns = table.width();
    if columns < required {
        return Err(TimetableError::Structure { columns, required });
    }

    let mut out = ParsedRows::default();
    for (i, row) in table.rows.iter().enumerate() {
        let Some(name) = teacher_name(row, opts) else {
            debug!("Row {i}: not a teacher row");
            out.skipped += 1;
            continue;
        };

        let subject = subject_for(row, &name, opts);
        let assignments = read_periods(row, opts);
        out.classes.extend(assignments.iter().flatten().cloned());
        out.teachers.push(TeacherRecord::new(name, subject, assignments));
    }
    Ok(out)
}

/// The display name if this row is a teacher row.
pub fn teacher_name(row: &[Option<String>], opts: &ParseOptions) -> Option<String> {
    let name = normalize_ws(cell(row, opts.name_col)?);
    if name.chars().count() < opts.min_name_len { return None; }
    if name.eq_ignore_ascii_case(&opts.header_label) { return None; }
    Some(name)
}

/// Subject column when present and non-blank, else the first few chars of the name.
fn subject_for(row: &[Option<String>], name: &str, opts: &ParseOptions) -> String {
    opts.subject_col
        .and_then(|col| cell(row, col))
        .map(normalize_ws)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| take_chars(name, opts.subject_fallback_len))
}

/// Exactly `period_count` normalized cells from the period window; short rows pad
/// with free periods, anything past the window is ignored.
fn read_periods(row: &[Option<String>], opts: &ParseOptions) -> Vec<Option<ClassId>> {
    (opts.first_period_col..opts.period_end_col())
        .map(|col| normalize_class(cell(row, col), opts.min_class_len))
        .collect()
}
