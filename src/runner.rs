// src/runner.rs
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use log::{info, warn};

use crate::{
    cache::ScheduleCache,
    config::options::AppOptions,
    error::Result,
    file::write_views,
    grid::project_class_grid,
    parse::parse_schedule,
    progress::Progress,
    render::{class_view, teacher_view, ViewKind},
    schedule::{Schedule, ScheduleStatus, Summary},
    source::{kind_of, table_from_bytes},
};

/// What a run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub status: ScheduleStatus,
    pub summary: Summary,
    pub classes: Vec<String>,
    pub files_written: Vec<PathBuf>,
}

/// Load `opts.input` and parse it, reusing `cache` when the same bytes were seen before.
/// The file is read once; the cache key and the parse see the same bytes.
pub fn load_schedule(opts: &AppOptions, cache: &mut ScheduleCache) -> Result<Arc<Schedule>> {
    opts.parse.validate()?;
    kind_of(&opts.input)?;
    let bytes = fs::read(&opts.input)?;
    cache.get_or_parse(&bytes, &opts.parse, || {
        let table = table_from_bytes(&opts.input, &bytes, &opts.parse.sheet)?;
        parse_schedule(&table, &opts.parse)
    })
}

/// Full pipeline: load -> parse -> project -> export.
/// An input with no teacher rows writes nothing and reports `NoTeacherRows`.
pub fn run(
    opts: &AppOptions,
    cache: &mut ScheduleCache,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(3);
        p.log(&format!("Reading {}", opts.input.display()));
    }

    let result = run_steps(opts, cache, &mut progress);

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}

fn run_steps(
    opts: &AppOptions,
    cache: &mut ScheduleCache,
    progress: &mut Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let schedule = load_schedule(opts, cache)?;
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("parse");
    }

    let mut out = RunSummary {
        status: schedule.status(),
        summary: schedule.summary(),
        classes: schedule.classes().iter().map(|c| c.to_string()).collect(),
        files_written: Vec::new(),
    };

    if out.status == ScheduleStatus::NoTeacherRows {
        warn!("Nothing to export from {}", opts.input.display());
        return Ok(out);
    }

    let grid = project_class_grid(&schedule);
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("project");
    }

    let school = &opts.export.school_name;
    let views = [
        (ViewKind::Teachers, teacher_view(&schedule, school)),
        (ViewKind::Classes, class_view(&grid, school, opts.export.subject_abbrev_len)),
    ];
    out.files_written = write_views(&opts.export, &views, Local::now())?;
    for path in &out.files_written {
        info!("Wrote {}", path.display());
    }
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("export");
    }

    Ok(out)
}
