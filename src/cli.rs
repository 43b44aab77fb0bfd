// src/cli.rs
use std::{env, path::PathBuf};

use log::LevelFilter;

use crate::cache::ScheduleCache;
use crate::config::options::{AppOptions, ExportType};
use crate::error::{Result, TimetableError};
use crate::progress::Progress;
use crate::runner::{self, RunSummary};
use crate::schedule::ScheduleStatus;

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Summary(AppOptions),
    Export(AppOptions),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub verbose: bool,
}

/// Prints each finished step to stderr.
struct CliProgress;
impl Progress for CliProgress {
    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }
    fn step_done(&mut self, label: &str) { eprintln!("  done: {label}"); }
}

pub fn run() -> Result<()> {
    let inv = parse_args(env::args().skip(1))?;
    crate::logging::init(if inv.verbose { LevelFilter::Debug } else { LevelFilter::Info });

    match inv.command {
        Command::Help => {
            eprintln!("{HELP}");
            Ok(())
        }
        Command::Summary(opts) => {
            let mut cache = ScheduleCache::new();
            let schedule = runner::load_schedule(&opts, &mut cache)?;
            if schedule.status() == ScheduleStatus::NoTeacherRows {
                return Err(TimetableError::NoTeacherRows { sheet: opts.parse.sheet });
            }
            let s = schedule.summary();
            println!("Teachers: {}", s.teachers);
            println!("Classes:  {}", s.classes);
            println!("Periods:  {}", s.periods);
            println!("Assigned: {}", s.assigned);
            let classes: Vec<&str> = schedule.classes().iter().map(|c| c.as_str()).collect();
            println!("{}", classes.join(", "));
            Ok(())
        }
        Command::Export(opts) => {
            let mut cache = ScheduleCache::new();
            let mut sink = CliProgress;
            let progress: &mut dyn Progress = &mut sink;
            let out = runner::run(&opts, &mut cache, Some(progress))?;
            report(&opts, out)
        }
    }
}

fn report(opts: &AppOptions, out: RunSummary) -> Result<()> {
    if out.status == ScheduleStatus::NoTeacherRows {
        return Err(TimetableError::NoTeacherRows { sheet: opts.parse.sheet.clone() });
    }
    println!(
        "{} teacher(s), {} class(es): {}",
        out.summary.teachers, out.summary.classes, out.classes.join(", ")
    );
    for path in &out.files_written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Parse arguments (program name already skipped). `--config` is applied
/// first wherever it appears, so explicit flags always win over the file.
pub fn parse_args<I>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();

    let mut opts = match args.iter().position(|a| a == "--config") {
        Some(i) => {
            let path = args.get(i + 1).ok_or_else(|| missing("--config"))?;
            AppOptions::from_toml_file(&PathBuf::from(path))?
        }
        None => AppOptions::default(),
    };

    let mut input: Option<PathBuf> = None;
    let mut summary = false;
    let mut verbose = false;

    let mut it = args.into_iter();
    while let Some(a) = it.next() {
        match a.as_str() {
            "-h" | "--help" => return Ok(Invocation { command: Command::Help, verbose }),
            "--config" => { it.next(); }        // already applied
            "-i" | "--input" => input = Some(PathBuf::from(it.next().ok_or_else(|| missing(&a))?)),
            "--sheet" => opts.parse.sheet = it.next().ok_or_else(|| missing(&a))?,
            "-o" | "--out" => opts.export.out_dir = PathBuf::from(it.next().ok_or_else(|| missing(&a))?),
            "--format" => {
                let v = it.next().ok_or_else(|| missing(&a))?;
                opts.export.set_format(&v)?;
            }
            "--per-view" => opts.export.export_type = ExportType::PerView,
            "--school" => opts.export.school_name = it.next().ok_or_else(|| missing(&a))?,
            "--no-subject-col" => opts.parse.subject_col = None,
            "--no-timestamp" => opts.export.timestamp = false,
            "--summary" => summary = true,
            "-v" | "--verbose" => verbose = true,
            other if other.starts_with('-') => {
                return Err(TimetableError::Config(format!("Unknown arg: {other}")));
            }
            _ if input.is_none() => input = Some(PathBuf::from(&a)),
            _ => return Err(TimetableError::Config(format!("Unexpected extra argument: {a}"))),
        }
    }

    opts.input = input.ok_or_else(|| TimetableError::Config(s!("Missing input file (see --help)")))?;
    let command = if summary { Command::Summary(opts) } else { Command::Export(opts) };
    Ok(Invocation { command, verbose })
}

fn missing(flag: &str) -> TimetableError {
    TimetableError::Config(format!("Missing value for {flag}"))
}
