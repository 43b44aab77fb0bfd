// src/config/consts.rs

// Week grid
pub const DAYS: usize = 6;
pub const PERIODS_PER_DAY: usize = 8;
pub const SLOT_COUNT: usize = DAYS * PERIODS_PER_DAY;
pub const DAY_LABELS: [&str; DAYS] = ["MON", "TUE", "WED", "THU", "FRI", "SAT"];

// Source layout (0-indexed columns)
pub const DEFAULT_SHEET: &str = "SCHOOL TIMETABLE";
pub const NAME_COL: usize = 1;
pub const SUBJECT_COL: usize = 3;
pub const FIRST_PERIOD_COL: usize = 4;
pub const HEADER_LABEL: &str = "NAME";

// Row/cell acceptance
pub const MIN_NAME_LEN: usize = 3;
pub const MIN_CLASS_LEN: usize = 2;
pub const SUBJECT_FALLBACK_LEN: usize = 4;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE_PREFIX: &str = "FINAL_Timetable";
pub const DEFAULT_SCHOOL: &str = "School";
pub const SUBJECT_ABBREV_LEN: usize = 4;
pub const SUBJECT_JOINER: &str = "/";

// Local log
pub const LOG_FILE: &str = ".store/debug.log";
