// src/render.rs
//
// Lays the two views out as plain text tables, one block per teacher/class:
//
//   <title>
//
//   MR A (MATH)
//   DAY, P1, …, P8
//   MON, VIA, , IXB, …
//   … (6 day rows)
//   <blank>
//
// Styling is the spreadsheet program's problem; this only decides cell text.

use crate::config::consts::{DAY_LABELS, PERIODS_PER_DAY, SUBJECT_JOINER};
use crate::core::sanitize::take_chars;
use crate::grid::{teacher_grid, ClassGrid};
use crate::schedule::Schedule;

pub type TextTable = Vec<Vec<String>>;

/// Which of the two views a table holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Teachers,
    Classes,
}

impl ViewKind {
    pub fn title(&self) -> &'static str {
        match self { ViewKind::Teachers => "Teacher Timetable", ViewKind::Classes => "Class Timetable" }
    }
    /// File stem suffix in per-view export.
    pub fn suffix(&self) -> &'static str {
        match self { ViewKind::Teachers => "teachers", ViewKind::Classes => "classes" }
    }
}

pub fn header_row() -> Vec<String> {
    std::iter::once(s!("DAY"))
        .chain((1..=PERIODS_PER_DAY).map(|p| format!("P{p}")))
        .collect()
}

fn title_rows(school: &str, kind: ViewKind) -> TextTable {
    vec![vec![format!("{school} - {}", kind.title())], vec![]]
}

pub fn teacher_view(schedule: &Schedule, school: &str) -> TextTable {
    let mut out = title_rows(school, ViewKind::Teachers);
    for t in schedule.teachers() {
        out.push(vec![format!("{} ({})", t.name(), t.subject())]);
        out.push(header_row());
        for (day, periods) in teacher_grid(t).into_iter().enumerate() {
            let mut row = Vec::with_capacity(PERIODS_PER_DAY + 1);
            row.push(s!(DAY_LABELS[day]));
            row.extend(periods.into_iter().map(|c| c.map(|c| c.to_string()).unwrap_or_default()));
            out.push(row);
        }
        out.push(vec![]);
    }
    out
}

pub fn class_view(grid: &ClassGrid, school: &str, abbrev_len: usize) -> TextTable {
    let mut out = title_rows(school, ViewKind::Classes);
    for class in grid.classes() {
        out.push(vec![format!("Class {class}")]);
        out.push(header_row());
        for (day, periods) in grid.day_rows(class).into_iter().enumerate() {
            let mut row = Vec::with_capacity(PERIODS_PER_DAY + 1);
            row.push(s!(DAY_LABELS[day]));
            row.extend(periods.into_iter().map(|subjects| class_cell(subjects, abbrev_len)));
            out.push(row);
        }
        out.push(vec![]);
    }
    out
}

/// `["MATHEMATICS", "LAB"]` -> `"MATH/LAB"`; no subjects -> empty cell.
pub fn class_cell(subjects: &[String], abbrev_len: usize) -> String {
    subjects
        .iter()
        .map(|s| take_chars(s, abbrev_len))
        .collect::<Vec<_>>()
        .join(SUBJECT_JOINER)
}
