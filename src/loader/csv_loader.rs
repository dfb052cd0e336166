use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info, warn};

use crate::catalog::course::Course;
use crate::common::config::MIN_COURSE_FIELDS;
use crate::common::exception::LoadError;
use crate::container::hash_table::HashTable;

/// Outcome of a successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub headers: Vec<String>,
    pub loaded: usize,
}

/// Loads every course row of the CSV file at `path` into `table`.
///
/// The file is closed when this returns, whether or not loading succeeded.
pub fn load_courses<T>(path: impl AsRef<Path>, table: &mut T) -> Result<LoadSummary, LoadError>
where
    T: HashTable<str, Course> + ?Sized,
{
    let path = path.as_ref();
    info!("Loading CSV file {}", path.display());
    let file = File::open(path)?;
    load_courses_from_reader(BufReader::new(file), table)
}

/// Loads course rows from any CSV source whose first row is a header.
///
/// Rows are inserted in source order. The first bad row aborts the load;
/// rows already inserted stay in `table`.
pub fn load_courses_from_reader<R, T>(reader: R, table: &mut T) -> Result<LoadSummary, LoadError>
where
    R: Read,
    T: HashTable<str, Course> + ?Sized,
{
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
    debug!("CSV header: {}", headers.join(" | "));

    let mut loaded = 0usize;
    for row in csv_reader.records() {
        let row = row?;
        let line = row.position().map_or(0, |pos| pos.line());
        let course = course_from_row(&row, line)?;

        debug!(
            "Course: {}, Course ID: {}, Prerequisites: {}",
            course.name(),
            course.id(),
            course.prerequisite()
        );

        table.insert(course).map_err(|source| {
            warn!("Rejected row on line {}: {}", line, source);
            LoadError::InvalidRow { line, source }
        })?;
        loaded += 1;
    }

    info!("Loaded {} courses", loaded);
    Ok(LoadSummary { headers, loaded })
}

// Fields past the prerequisite column are ignored.
fn course_from_row(row: &StringRecord, line: u64) -> Result<Course, LoadError> {
    match (row.get(0), row.get(1), row.get(2)) {
        (Some(id), Some(name), Some(prerequisite)) => Ok(Course::new(id, name, prerequisite)),
        _ => {
            warn!("Malformed row on line {}: {} fields", line, row.len());
            Err(LoadError::MalformedRow {
                line,
                expected: MIN_COURSE_FIELDS,
                found: row.len(),
            })
        }
    }
}
