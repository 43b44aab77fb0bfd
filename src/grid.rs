// src/grid.rs
//
// Teacher view: a re-slice of each record's assignments into 6 day rows of 8.
// Class view: inverse lookup, class x slot -> subjects of every teacher there.

use std::collections::BTreeMap;

use crate::config::consts::{DAYS, PERIODS_PER_DAY, SLOT_COUNT};
use crate::schedule::{ClassId, Schedule, Slot, TeacherRecord};

/// One teacher's week, day-major: `rows[day][period]`.
pub type TeacherGrid<'a> = Vec<Vec<Option<&'a ClassId>>>;

pub fn teacher_grid(teacher: &TeacherRecord) -> TeacherGrid<'_> {
    teacher
        .assignments()
        .chunks(PERIODS_PER_DAY)
        .take(DAYS)
        .map(|day| day.iter().map(Option::as_ref).collect())
        .collect()
}

/// Inverse of [`teacher_grid`]: back to the slot-indexed sequence.
pub fn flatten_grid(grid: &TeacherGrid<'_>) -> Vec<Option<ClassId>> {
    grid.iter().flatten().map(|&c| c.cloned()).collect()
}

/// Class x slot -> subjects, in teacher-record order. Co-taught slots hold
/// more than one subject; free slots hold none.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassGrid {
    cells: BTreeMap<ClassId, Vec<Vec<String>>>,
}

impl ClassGrid {
    /// Subjects at (class, slot index). Unknown classes and out-of-range slots
    /// read as an empty list, same as a free period.
    pub fn subjects(&self, class: &ClassId, slot: usize) -> &[String] {
        self.cells
            .get(class)
            .and_then(|slots| slots.get(slot))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn at(&self, class: &ClassId, slot: Slot) -> &[String] {
        self.subjects(class, slot.index())
    }

    /// Classes in sorted order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassId> {
        self.cells.keys()
    }

    /// The class's week, day-major: `rows[day][period]` is that slot's subjects.
    pub fn day_rows(&self, class: &ClassId) -> Vec<Vec<&[String]>> {
        (0..DAYS)
            .map(|day| {
                (0..PERIODS_PER_DAY)
                    .map(|period| self.subjects(class, day * PERIODS_PER_DAY + period))
                    .collect()
            })
            .collect()
    }

    pub fn len(&self) -> usize { self.cells.len() }
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }
}

/// Build the class view by scanning every teacher at every slot for every class.
/// O(classes x 48 x teachers); both counts are in the tens for a school.
pub fn project_class_grid(schedule: &Schedule) -> ClassGrid {
    let teachers = schedule.teachers();
    let mut cells = BTreeMap::new();

    for class in schedule.classes() {
        let slots: Vec<Vec<String>> = (0..SLOT_COUNT)
            .map(|slot| {
                teachers
                    .iter()
                    .filter(|t| t.assignments().get(slot).and_then(Option::as_ref) == Some(class))
                    .map(|t| t.subject().to_string())
                    .collect()
            })
            .collect();
        cells.insert(class.clone(), slots);
    }

    ClassGrid { cells }
}
