// src/file.rs

use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};

use crate::config::consts::{DEFAULT_FILE_PREFIX, DEFAULT_SCHOOL};
use crate::config::options::{ExportOptions, ExportType};
use crate::core::sanitize::sanitize_file_stem;
use crate::csv::write_rows;
use crate::error::{Result, TimetableError};
use crate::render::{TextTable, ViewKind};

/// `FINAL_Timetable_<School_Name>[_YYYYmmdd_HHMMSS]`
pub fn export_stem(export: &ExportOptions, now: DateTime<Local>) -> String {
    let school = sanitize_file_stem(&export.school_name, DEFAULT_SCHOOL);
    if export.timestamp {
        format!("{DEFAULT_FILE_PREFIX}_{school}_{}", now.format("%Y%m%d_%H%M%S"))
    } else {
        format!("{DEFAULT_FILE_PREFIX}_{school}")
    }
}

/// Write the rendered views according to `export`. Returns the paths written.
/// Single file: views back to back. Per view: one file each, suffixed by view.
pub fn write_views(
    export: &ExportOptions,
    views: &[(ViewKind, TextTable)],
    now: DateTime<Local>,
) -> Result<Vec<PathBuf>> {
    ensure_directory(&export.out_dir)?;
    let stem = export_stem(export, now);
    let ext = export.format.ext();
    let sep = export.format.delim();

    match export.export_type {
        ExportType::SingleFile => {
            let path = export.out_dir.join(format!("{stem}.{ext}"));
            let rows: TextTable = views.iter().flat_map(|(_, rows)| rows.iter().cloned()).collect();
            write_table(&path, &rows, sep)?;
            Ok(vec![path])
        }
        ExportType::PerView => {
            let mut written = Vec::with_capacity(views.len());
            for (kind, rows) in views {
                let path = export.out_dir.join(format!("{stem}_{}.{ext}", kind.suffix()));
                write_table(&path, rows, sep)?;
                written.push(path);
            }
            Ok(written)
        }
    }
}

/// Create/truncate `path` and write all rows.
pub fn write_table(path: &Path, rows: &[Vec<String>], sep: u8) -> Result<()> {
    let file = File::create(path)?;
    write_rows(BufWriter::new(file), rows, sep)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() { return Ok(()); }
    if dir.exists() && !dir.is_dir() {
        return Err(TimetableError::Config(format!(
            "Path exists but is not a directory: {}", dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
