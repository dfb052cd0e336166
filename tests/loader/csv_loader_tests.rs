use course_table::catalog::course::Course;
use course_table::common::exception::{LoadError, TableError};
use course_table::container::chained_hash_table::ChainedHashTable;
use course_table::loader::load_courses;

use crate::common::logger::init_test_logger;
use crate::common::tempcsv::TempCsv;

const HEADER: &str = "courseId,courseName,prerequisites\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_header_only_file() {
        init_test_logger();
        let csv = TempCsv::new(HEADER);
        let mut table = ChainedHashTable::default();

        let summary = assert_ok!(load_courses(csv.path(), &mut table));
        assert_eq!(summary.loaded, 0);
        assert_eq!(table.iter().count(), 0);
    }

    #[test]
    fn test_load_sample_catalog() {
        init_test_logger();
        let mut table = ChainedHashTable::default();
        let summary = assert_ok!(load_courses("data/courses.csv", &mut table));

        assert_eq!(summary.loaded, 10);
        assert_eq!(table.len(), 10);
        assert_eq!(
            table.find("300"),
            Some(&Course::new("300", "Algorithms", "200 250"))
        );
        assert_eq!(table.chain_len(100), Some(2));
        assert!(table.verify_integrity());
    }

    #[test]
    fn test_partial_load_keeps_earlier_rows() {
        init_test_logger();
        let csv = TempCsv::new(&format!("{}100,Intro,\n101,Programming,100\n102\n103,Late,\n", HEADER));
        let mut table = ChainedHashTable::default();

        let err = assert_err!(load_courses(csv.path(), &mut table));
        match err {
            LoadError::MalformedRow { line, found, .. } => {
                assert_eq!(line, 4);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(table.len(), 2);
        assert!(table.find("103").is_none());
    }

    #[test]
    fn test_invalid_id_reports_table_error() {
        let csv = TempCsv::new(&format!("{}CS-101,Intro,\n", HEADER));
        let mut table = ChainedHashTable::default();

        let err = assert_err!(load_courses(csv.path(), &mut table));
        match err {
            LoadError::InvalidRow { line, source } => {
                assert_eq!(line, 2);
                assert_eq!(source, TableError::InvalidKey("CS-101".to_string()));
            }
            other => panic!("unexpected error: {}", other),
        }
        assert!(table.is_empty());
    }

    #[test]
    fn test_load_into_small_table() {
        let csv = TempCsv::new(&format!("{}1,A,\n2,B,1\n3,C,2\n4,D,3\n", HEADER));
        let mut table = assert_ok!(ChainedHashTable::new(2));

        assert_ok!(load_courses(csv.path(), &mut table));
        assert_eq!(table.chain_len(0), Some(2));
        assert_eq!(table.chain_len(1), Some(2));
        let ids: Vec<&str> = table.iter().map(Course::id).collect();
        assert_eq!(ids, vec!["2", "4", "1", "3"]);
    }

    #[test]
    fn test_undecodable_row_is_csv_error_and_keeps_earlier_rows() {
        init_test_logger();
        let csv =
            TempCsv::from_bytes(b"id,name,prereq\n100,Intro,\n200,\xff\xfe,\n300,Late,\n");
        let mut table = ChainedHashTable::default();

        let err = assert_err!(load_courses(csv.path(), &mut table));
        assert!(matches!(err, LoadError::Csv(_)), "unexpected error: {:?}", err);
        assert_eq!(table.len(), 1);
        assert!(table.find("100").is_some());
        assert!(table.find("300").is_none());
    }
}
