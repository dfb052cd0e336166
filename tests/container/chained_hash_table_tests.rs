use std::collections::HashMap;

use course_table::catalog::course::Course;
use course_table::common::exception::TableError;
use course_table::container::chained_hash_table::ChainedHashTable;
use course_table::container::hash_table::HashTable;

use crate::common::logger::init_test_logger;

fn course(id: u64) -> Course {
    Course::new(id.to_string(), format!("Course {}", id), format!("{}", id / 2))
}

// Keys spread over several chains for small bucket counts.
fn sample_ids() -> Vec<u64> {
    vec![0, 3, 182, 361, 100, 279, 17, 999, 1_000_003, 42, 221, 5]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_intro_and_advanced() {
        init_test_logger();
        let mut table = assert_ok!(ChainedHashTable::new(179));
        assert_ok!(table.insert(Course::new("100", "Intro", "")));
        assert_ok!(table.insert(Course::new("279", "Advanced", "100")));

        assert_eq!(table.find("100").map(Course::name), Some("Intro"));
        assert_eq!(table.find("279").map(Course::name), Some("Advanced"));
        assert!(table.find("999").is_none());
        assert_eq!(table.chain_len(100), Some(2));
    }

    #[test]
    fn test_distinct_ids_round_trip_for_many_bucket_counts() {
        init_test_logger();
        for buckets in [1usize, 2, 3, 10, 179, 1_000] {
            let mut table = assert_ok!(ChainedHashTable::new(buckets));
            for id in sample_ids() {
                assert_ok!(table.insert(course(id)), "insert {} into {} buckets", id, buckets);
            }

            for id in sample_ids() {
                let found = table.find(&id.to_string()).expect("inserted course must be found");
                assert_eq!(found.name(), format!("Course {}", id));
                assert_eq!(found.prerequisite(), format!("{}", id / 2));
            }

            for missing in [1u64, 2, 4, 180, 998, 1_000_004] {
                assert!(table.find(&missing.to_string()).is_none());
            }
            assert!(table.verify_integrity());
        }
    }

    #[test]
    fn test_missing_ids_never_found_in_empty_tables() {
        for buckets in 1..=16usize {
            let table = assert_ok!(ChainedHashTable::new(buckets));
            for id in 0..64u64 {
                assert!(table.find(&id.to_string()).is_none());
            }
        }
    }

    #[test]
    fn test_enumerate_yields_each_record_once() {
        let mut ids = sample_ids();
        let mut table = assert_ok!(ChainedHashTable::new(7));
        ids.reverse();
        for id in &ids {
            assert_ok!(table.insert(course(*id)));
        }

        let mut seen: HashMap<String, usize> = HashMap::new();
        for course in &table {
            *seen.entry(course.id().to_string()).or_default() += 1;
        }
        assert_eq!(seen.len(), ids.len());
        assert!(seen.values().all(|&count| count == 1));
        assert_eq!(table.iter().count(), table.len());
    }

    #[test]
    fn test_enumerate_is_restartable() {
        let mut table = assert_ok!(ChainedHashTable::new(5));
        for id in sample_ids() {
            assert_ok!(table.insert(course(id)));
        }
        let first: Vec<Course> = table.iter().cloned().collect();
        let second: Vec<Course> = table.iter().cloned().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_enumeration_follows_slot_order() {
        let mut table = assert_ok!(ChainedHashTable::new(179));
        for id in ["182", "100", "3", "279"] {
            assert_ok!(table.insert(Course::new(id, "", "")));
        }
        let order: Vec<&str> = table.iter().map(Course::id).collect();
        assert_eq!(order, vec!["182", "3", "100", "279"]);
    }

    #[test]
    fn test_remove_then_search() {
        init_test_logger();
        let mut table = assert_ok!(ChainedHashTable::new(3));
        for id in sample_ids() {
            assert_ok!(table.insert(course(id)));
        }
        let total = table.len();

        let removed = table.remove("182").expect("182 was inserted");
        assert_eq!(removed.name(), "Course 182");
        assert!(table.find("182").is_none());
        assert_eq!(table.len(), total - 1);

        assert!(table.remove("182").is_none());
        assert!(table.remove("12345").is_none());
        assert_eq!(table.len(), total - 1);

        for id in sample_ids().into_iter().filter(|&id| id != 182) {
            assert!(table.find(&id.to_string()).is_some());
        }
        assert!(table.verify_integrity());
    }

    #[test]
    fn test_remove_everything() {
        let mut table = assert_ok!(ChainedHashTable::new(4));
        for id in sample_ids() {
            assert_ok!(table.insert(course(id)));
        }
        for id in sample_ids() {
            assert!(table.remove(&id.to_string()).is_some());
        }
        assert!(table.is_empty());
        assert_eq!(table.occupied_slots(), 0);
        assert_eq!(table.iter().count(), 0);
    }

    #[test]
    fn test_invalid_ids_rejected_through_trait() {
        fn insert_via_trait<T: HashTable<str, Course>>(table: &mut T, c: Course) -> Result<(), TableError> {
            table.insert(c)
        }

        let mut table = ChainedHashTable::default();
        let err = assert_err!(insert_via_trait(&mut table, Course::new("MATH201", "Calculus", "")));
        assert_eq!(err, TableError::InvalidKey("MATH201".to_string()));
        assert!(HashTable::is_empty(&table));
    }
}
