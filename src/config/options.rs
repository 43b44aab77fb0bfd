// src/config/options.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::consts::*;
use crate::error::{Result, TimetableError};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    /// Source workbook or delimited file. Set by the CLI, never by config files.
    #[serde(skip)]
    pub input: PathBuf,
    pub parse: ParseOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Load `[parse]` / `[export]` tables from a TOML file. Missing keys keep their defaults.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let opts: AppOptions = toml::from_str(text)?;
        opts.parse.validate()?;
        Ok(opts)
    }
}

/// Column layout and acceptance thresholds for the source sheet.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub sheet: String,
    pub name_col: usize,
    /// `None` when the sheet has no subject column; subjects then fall back to the name.
    pub subject_col: Option<usize>,
    pub first_period_col: usize,
    pub period_count: usize,
    pub min_name_len: usize,
    pub min_class_len: usize,
    pub header_label: String,
    pub subject_fallback_len: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            sheet: s!(DEFAULT_SHEET),
            name_col: NAME_COL,
            subject_col: Some(SUBJECT_COL),
            first_period_col: FIRST_PERIOD_COL,
            period_count: SLOT_COUNT,
            min_name_len: MIN_NAME_LEN,
            min_class_len: MIN_CLASS_LEN,
            header_label: s!(HEADER_LABEL),
            subject_fallback_len: SUBJECT_FALLBACK_LEN,
        }
    }
}

impl ParseOptions {
    /// Exclusive end of the period window.
    pub fn period_end_col(&self) -> usize {
        self.first_period_col + self.period_count
    }

    /// The grid is fixed at 6 x 8, so the period window has to match it.
    pub fn validate(&self) -> Result<()> {
        if self.period_count != SLOT_COUNT {
            return Err(TimetableError::Config(format!(
                "period_count must be {SLOT_COUNT} (got {})",
                self.period_count
            )));
        }
        if self.first_period_col <= self.name_col {
            return Err(TimetableError::Config(format!(
                "first_period_col ({}) must come after name_col ({})",
                self.first_period_col, self.name_col
            )));
        }
        if self.min_class_len == 0 {
            return Err(TimetableError::Config(s!("min_class_len must be at least 1")));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportType {
    /// Teacher view followed by class view in one file.
    #[default]
    SingleFile,
    /// `<stem>_teachers.<ext>` and `<stem>_classes.<ext>`.
    PerView,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub export_type: ExportType,
    pub out_dir: PathBuf,
    pub school_name: String,
    /// Class-view cells show this many leading chars of each subject.
    pub subject_abbrev_len: usize,
    /// Append `_YYYYmmdd_HHMMSS` to the file stem.
    pub timestamp: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            export_type: ExportType::SingleFile,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            school_name: s!(DEFAULT_SCHOOL),
            subject_abbrev_len: SUBJECT_ABBREV_LEN,
            timestamp: true,
        }
    }
}

impl ExportOptions {
    pub fn set_format(&mut self, v: &str) -> Result<()> {
        self.format = match v.to_ascii_lowercase().as_str() {
            "csv" => ExportFormat::Csv,
            "tsv" => ExportFormat::Tsv,
            other => return Err(TimetableError::Config(format!("Unknown format: {other}"))),
        };
        Ok(())
    }
}
