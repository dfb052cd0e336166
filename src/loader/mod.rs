pub mod csv_loader;

pub use csv_loader::{load_courses, load_courses_from_reader, LoadSummary};
