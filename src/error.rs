// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TimetableError>;

#[derive(Debug, Error)]
pub enum TimetableError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Sheet '{sheet}' not found (available: {})", available.join(", "))]
    SheetNotFound { sheet: String, available: Vec<String> },

    /// The table is too narrow to hold the name column; offsets would be meaningless.
    #[error("Table has {columns} column(s); at least {required} needed for the name column")]
    Structure { columns: usize, required: usize },

    /// Raised by the command line only; the library hands back an empty `Schedule`.
    #[error("No teacher rows found in sheet '{sheet}'; check the sheet name and column layout")]
    NoTeacherRows { sheet: String },

    #[error("Unsupported input file: {}", .0.display())]
    UnsupportedInput(PathBuf),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for TimetableError {
    fn from(e: toml::de::Error) -> Self {
        TimetableError::Config(e.to_string())
    }
}
