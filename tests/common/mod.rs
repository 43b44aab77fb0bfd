// tests/common/mod.rs
//
// Builders for sheets laid out like the real timetable export:
// SL | NAME | (blank) | SUBJECT | 48 period cells
#![allow(dead_code)]

use school_timetable::RawTable;

pub fn header_row() -> Vec<String> {
    let mut row = vec!["SL".to_string(), "NAME".to_string(), String::new(), "SUBJECT".to_string()];
    for day in ["MON", "TUE", "WED", "THU", "FRI", "SAT"] {
        for p in 1..=8 {
            row.push(format!("{day} {p}"));
        }
    }
    row
}

/// A teacher row with `periods` placed from column 4 onward.
pub fn teacher_row(sl: usize, name: &str, subject: &str, periods: &[&str]) -> Vec<String> {
    let mut row = vec![sl.to_string(), name.to_string(), String::new(), subject.to_string()];
    row.extend(periods.iter().map(|p| p.to_string()));
    row
}

/// A teacher row with classes at the given slot indices, everything else blank.
pub fn teacher_at(sl: usize, name: &str, subject: &str, at: &[(usize, &str)]) -> Vec<String> {
    let mut periods = vec![""; 48];
    for &(ix, class) in at {
        periods[ix] = class;
    }
    teacher_row(sl, name, subject, &periods)
}

pub fn table(rows: Vec<Vec<String>>) -> RawTable {
    RawTable::from_strings(rows)
}
