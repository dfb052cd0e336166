use std::path::PathBuf;

pub const DEFAULT_BUCKET_COUNT: usize = 179; // prime, spreads ids evenly modulo N
pub const DEFAULT_CSV_PATH: &str = "data/courses.csv";
pub const HISTORY_FILE: &str = "history.txt";
pub const MIN_COURSE_FIELDS: usize = 3; // id, name, prerequisite

pub type SlotIndex = usize; // bucket position in [0, N)
pub type CourseKey = u64; // numeric form of a course id

/// Settings for a CLI session's table and its input source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub bucket_count: usize,
    pub csv_path: PathBuf,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            bucket_count: DEFAULT_BUCKET_COUNT,
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
        }
    }
}
