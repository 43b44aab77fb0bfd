// src/source.rs
//! Loads the raw timetable sheet from disk.
//!
//! - `.xlsx` / `.xlsm` / `.xls` / `.ods`: the named worksheet, via calamine.
//! - `.csv` / `.tsv`: the whole file (there is only one "sheet").
//!
//! Cells come back as text; empty cells as `None`. No interpretation happens
//! here, that is the parser's job.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use log::{debug, info};

use crate::error::{Result, TimetableError};
use crate::table::RawTable;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Workbook,
    Delimited(u8),
}

impl SourceKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(SourceKind::Workbook),
            "csv" => Some(SourceKind::Delimited(b',')),
            "tsv" | "tab" => Some(SourceKind::Delimited(b'\t')),
            _ => None,
        }
    }
}

/// Format of `path`, by extension. Anything else is `UnsupportedInput`.
pub fn kind_of(path: &Path) -> Result<SourceKind> {
    SourceKind::from_path(path).ok_or_else(|| TimetableError::UnsupportedInput(path.to_path_buf()))
}

/// Read the table at `path`. `sheet` only matters for workbooks.
pub fn load_table(path: &Path, sheet: &str) -> Result<RawTable> {
    kind_of(path)?;
    let bytes = fs::read(path)?;
    table_from_bytes(path, &bytes, sheet)
}

/// Build the table from file contents already in memory. `path` picks the
/// format and labels the log line; it is not read again.
pub fn table_from_bytes(path: &Path, bytes: &[u8], sheet: &str) -> Result<RawTable> {
    let table = match kind_of(path)? {
        SourceKind::Workbook => read_workbook_sheet(bytes, sheet)?,
        SourceKind::Delimited(sep) => parse_delimited(bytes, sep)?,
    };
    info!("Loaded {} row(s) x {} col(s) from {}", table.nrows(), table.width(), path.display());
    Ok(table)
}

/// Sheet lookup is exact first, then case-insensitive (exported sheet names drift in case).
fn read_workbook_sheet(bytes: &[u8], sheet: &str) -> Result<RawTable> {
    let mut wb = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let names = wb.sheet_names();
    let name = names
        .iter()
        .find(|n| n.as_str() == sheet)
        .or_else(|| names.iter().find(|n| n.trim().eq_ignore_ascii_case(sheet.trim())))
        .cloned()
        .ok_or_else(|| TimetableError::SheetNotFound {
            sheet: sheet.to_string(),
            available: names.clone(),
        })?;
    debug!("Reading sheet '{name}'");

    let range = wb.worksheet_range(&name)?;
    Ok(RawTable::new(sheet_rows(&range)))
}

/// Rows indexed from sheet cell A1. calamine trims leading empty rows and
/// columns from the range, so they are put back as empty cells.
fn sheet_rows(range: &Range<Data>) -> Vec<Vec<Option<String>>> {
    let Some((row0, col0)) = range.start() else { return Vec::new() };
    let (row0, col0) = (row0 as usize, col0 as usize);

    let mut rows = vec![Vec::new(); row0];
    rows.extend(range.rows().map(|r| {
        std::iter::repeat_n(None, col0)
            .chain(r.iter().map(data_to_cell))
            .collect()
    }));
    rows
}

fn data_to_cell(d: &Data) -> Option<String> {
    match d {
        Data::Empty => None,
        Data::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Parse CSV/TSV bytes. Rows may be ragged; no header row is assumed.
/// Bytes that are not UTF-8 (Windows-1252 exports) are replaced per field.
pub fn parse_delimited(bytes: &[u8], sep: u8) -> Result<RawTable> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(sep)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        rows.push(
            record
                .iter()
                .map(|f| if f.is_empty() { None } else { Some(String::from_utf8_lossy(f).into_owned()) })
                .collect(),
        );
    }
    Ok(RawTable::new(rows))
}
