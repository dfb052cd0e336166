use crate::common::config::{CourseKey, SlotIndex, DEFAULT_BUCKET_COUNT};
use crate::common::exception::TableError;

/// Maps a numeric course key onto one of a fixed number of buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashFunction {
    bucket_count: usize,
}

impl HashFunction {
    /// Creates a new `HashFunction` over `bucket_count` slots.
    ///
    /// # Returns
    /// `TableError::InvalidBucketCount` when `bucket_count` is zero.
    pub fn new(bucket_count: usize) -> Result<Self, TableError> {
        if bucket_count == 0 {
            return Err(TableError::InvalidBucketCount);
        }
        Ok(Self { bucket_count })
    }

    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    /// Returns the slot for the given key, always in `[0, bucket_count)`.
    pub fn get_hash(&self, key: CourseKey) -> SlotIndex {
        // bucket_count <= usize::MAX, so the remainder always fits
        (key % self.bucket_count as u64) as SlotIndex
    }

    /// Parses `id` and hashes it in one step.
    pub fn slot_for(&self, id: &str) -> Result<SlotIndex, TableError> {
        parse_key(id).map(|key| self.get_hash(key))
    }
}

impl Default for HashFunction {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
        }
    }
}

/// Converts a textual course id into its numeric key.
///
/// Only a non-empty run of ASCII digits that fits in a `u64` is accepted.
/// Signs and surrounding whitespace are rejected, so an id is stored exactly
/// as it is looked up.
pub fn parse_key(id: &str) -> Result<CourseKey, TableError> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TableError::InvalidKey(id.to_string()));
    }
    id.parse::<CourseKey>()
        .map_err(|_| TableError::InvalidKey(id.to_string()))
}
