// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;

pub mod cache;
pub mod csv;
pub mod file;
pub mod grid;
pub mod parse;
pub mod progress;
pub mod render;
pub mod runner;
pub mod schedule;
pub mod source;
pub mod table;

pub use error::{Result, TimetableError};
pub use grid::{project_class_grid, ClassGrid};
pub use parse::parse_schedule;
pub use schedule::{ClassId, Schedule, ScheduleStatus, Slot, TeacherRecord};
pub use table::RawTable;
