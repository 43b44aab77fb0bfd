// src/schedule.rs
//
// Canonical schedule model. Built once per source table, then read-only.

use std::collections::BTreeSet;
use std::fmt;

use crate::config::consts::{DAYS, DAY_LABELS, PERIODS_PER_DAY, SLOT_COUNT};

pub use crate::core::normalize::ClassId;

/// One (day, period) cell of the 6 x 8 week. Index = day * 8 + period.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot {
    pub day: usize,
    pub period: usize,
}

impl Slot {
    pub fn new(day: usize, period: usize) -> Option<Self> {
        (day < DAYS && period < PERIODS_PER_DAY).then_some(Self { day, period })
    }

    pub fn from_index(ix: usize) -> Option<Self> {
        (ix < SLOT_COUNT).then(|| Self { day: ix / PERIODS_PER_DAY, period: ix % PERIODS_PER_DAY })
    }

    #[inline] pub fn index(&self) -> usize { self.day * PERIODS_PER_DAY + self.period }

    /// All 48 slots in index order.
    pub fn all() -> impl Iterator<Item = Slot> {
        (0..SLOT_COUNT).map(|ix| Slot { day: ix / PERIODS_PER_DAY, period: ix % PERIODS_PER_DAY })
    }

    pub fn day_label(&self) -> &'static str { DAY_LABELS[self.day] }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} P{}", self.day_label(), self.period + 1)
    }
}

/// Built only through [`TeacherRecord::new`], which fixes the week length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeacherRecord {
    name: String,
    subject: String,
    /// Exactly `SLOT_COUNT` entries, slot-indexed. `None` = free period.
    assignments: Vec<Option<ClassId>>,
}

impl TeacherRecord {
    /// Pads or truncates `assignments` to the week length.
    pub fn new(name: String, subject: String, mut assignments: Vec<Option<ClassId>>) -> Self {
        assignments.resize(SLOT_COUNT, None);
        Self { name, subject, assignments }
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn subject(&self) -> &str { &self.subject }

    /// Always `SLOT_COUNT` long.
    pub fn assignments(&self) -> &[Option<ClassId>] { &self.assignments }

    pub fn class_at(&self, slot: Slot) -> Option<&ClassId> {
        self.assignments.get(slot.index()).and_then(Option::as_ref)
    }

    /// Number of periods with a class scheduled.
    pub fn load(&self) -> usize {
        self.assignments.iter().filter(|a| a.is_some()).count()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScheduleStatus {
    Populated,
    /// Nothing looked like a teacher row. Usually the wrong sheet or column layout.
    NoTeacherRows,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schedule {
    teachers: Vec<TeacherRecord>,
    classes: Vec<ClassId>,
}

impl Schedule {
    /// Assemble from parsed records. The class set is sorted (ASCII order) and must
    /// be exactly the distinct classes found in `teachers`; the parser guarantees that.
    pub(crate) fn build(teachers: Vec<TeacherRecord>, classes: BTreeSet<ClassId>) -> Self {
        debug_assert_eq!(classes, Self::collect_classes(&teachers));
        Self { teachers, classes: classes.into_iter().collect() }
    }

    /// Build from records alone, deriving the class set.
    pub fn from_teachers(teachers: Vec<TeacherRecord>) -> Self {
        let classes = Self::collect_classes(&teachers);
        Self::build(teachers, classes)
    }

    fn collect_classes(teachers: &[TeacherRecord]) -> BTreeSet<ClassId> {
        teachers
            .iter()
            .flat_map(|t| t.assignments.iter().flatten().cloned())
            .collect()
    }

    pub fn teachers(&self) -> &[TeacherRecord] { &self.teachers }
    pub fn classes(&self) -> &[ClassId] { &self.classes }
    pub fn is_empty(&self) -> bool { self.teachers.is_empty() }

    pub fn status(&self) -> ScheduleStatus {
        if self.teachers.is_empty() { ScheduleStatus::NoTeacherRows } else { ScheduleStatus::Populated }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            teachers: self.teachers.len(),
            classes: self.classes.len(),
            periods: SLOT_COUNT,
            assigned: self.teachers.iter().map(TeacherRecord::load).sum(),
        }
    }
}

/// Headline counts shown before export.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub teachers: usize,
    pub classes: usize,
    pub periods: usize,
    /// Total (teacher, slot) pairs with a class.
    pub assigned: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cls(s: &str) -> Option<ClassId> { ClassId::parse(s) }

    #[test]
    fn slot_index_is_day_major() {
        assert_eq!(Slot::new(0, 0).unwrap().index(), 0);
        assert_eq!(Slot::new(1, 2).unwrap().index(), 10);
        assert_eq!(Slot::new(5, 7).unwrap().index(), 47);
        assert_eq!(Slot::from_index(10), Slot::new(1, 2));
        assert!(Slot::new(6, 0).is_none());
        assert!(Slot::from_index(48).is_none());
        assert_eq!(Slot::all().count(), 48);
        assert!(Slot::all().enumerate().all(|(i, s)| s.index() == i));
    }

    #[test]
    fn slot_display() {
        assert_eq!(Slot::new(0, 3).unwrap().to_string(), "MON P4");
        assert_eq!(Slot::new(5, 7).unwrap().to_string(), "SAT P8");
    }

    #[test]
    fn record_pads_to_week() {
        let t = TeacherRecord::new(s!("MR A"), s!("MATH"), vec![cls("VIA"), None, cls("IXB")]);
        assert_eq!(t.assignments().len(), 48);
        assert_eq!(t.load(), 2);
        assert_eq!(t.class_at(Slot::new(0, 2).unwrap()).map(ClassId::as_str), Some("IXB"));
        assert_eq!(t.class_at(Slot::new(5, 7).unwrap()), None);
    }

    #[test]
    fn record_truncates_overlong_rows() {
        let t = TeacherRecord::new(s!("MR A"), s!("MATH"), vec![cls("VIA"); 60]);
        assert_eq!(t.assignments().len(), 48);
        assert_eq!(t.load(), 48);
    }

    #[test]
    fn short_record_still_fills_the_week() {
        let t = TeacherRecord::new(s!("MR A"), s!("MATH"), vec![cls("VIA"); 5]);
        let s = Schedule::from_teachers(vec![t]);
        let rec = &s.teachers()[0];
        assert_eq!(rec.assignments().len(), 48);
        assert_eq!(rec.load(), 5);
        assert_eq!(crate::grid::teacher_grid(rec).len(), 6);
        assert!(crate::grid::teacher_grid(rec).iter().all(|day| day.len() == 8));
        assert_eq!(s.summary().assigned, 5);
    }

    #[test]
    fn classes_are_derived_and_sorted() {
        let a = TeacherRecord::new(s!("MR A"), s!("MATH"), vec![cls("XB"), cls("VIA")]);
        let b = TeacherRecord::new(s!("MS B"), s!("ENG"), vec![None, cls("VIA"), cls("IXA")]);
        let s = Schedule::from_teachers(vec![a, b]);
        let names: Vec<&str> = s.classes().iter().map(ClassId::as_str).collect();
        assert_eq!(names, vec!["IXA", "VIA", "XB"]);
        assert_eq!(s.status(), ScheduleStatus::Populated);
        assert_eq!(s.summary(), Summary { teachers: 2, classes: 3, periods: 48, assigned: 4 });
    }

    #[test]
    fn empty_schedule_is_valid() {
        let s = Schedule::from_teachers(vec![]);
        assert!(s.is_empty());
        assert!(s.classes().is_empty());
        assert_eq!(s.status(), ScheduleStatus::NoTeacherRows);
    }
}
