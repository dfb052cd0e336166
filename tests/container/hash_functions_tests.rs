use course_table::common::exception::TableError;
use course_table::container::hash_function::{parse_key, HashFunction};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_function_stays_in_range() {
        for buckets in [1usize, 2, 7, 179, 1024] {
            let hash_function = assert_ok!(HashFunction::new(buckets));
            for key in [0u64, 1, 178, 179, 180, 65_535, u64::MAX] {
                assert!(hash_function.get_hash(key) < buckets);
            }
        }
    }

    #[test]
    fn test_default_hash_function() {
        let hash_function = HashFunction::default();
        assert_eq!(hash_function.bucket_count(), 179);
        assert_eq!(hash_function.get_hash(100), hash_function.get_hash(279));
    }

    #[test]
    fn test_non_numeric_ids_rejected() {
        let err = assert_err!(parse_key("CSCI300"));
        assert_eq!(err, TableError::InvalidKey("CSCI300".to_string()));
    }
}
