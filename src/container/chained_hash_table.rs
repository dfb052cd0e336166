//! # Chained Hash Table
//!
//! A fixed-size bucket array of course records. Collisions are resolved by
//! separate chaining: every bucket owns a singly linked list of the entries
//! whose key hashed to it.
//!
//! ## Layout
//!
//! ```text
//!   slots: Vec<Option<Box<ChainEntry>>>   (length N, fixed at construction)
//!
//!   [0]   None
//!   [1]   None
//!   ...
//!   [3]   Some ─► { "3",   slot 3 } ─► { "182", slot 3 } ─► None
//!   ...
//!   [100] Some ─► { "100", slot 100 } ─► { "279", slot 100 } ─► None
//!   ...
//!   [N-1] None
//! ```
//!
//! ## Operations
//!
//! | Method          | Complexity       | Notes                                   |
//! |-----------------|------------------|-----------------------------------------|
//! | `insert(c)`     | O(chain length)  | Appends at the chain tail               |
//! | `find(id)`      | O(chain length)  | First match from the head wins          |
//! | `remove(id)`    | O(chain length)  | Unlinks the first match                 |
//! | `iter()`        | O(N + len)       | Slot order, then chain order            |
//! | `len()`         | O(1)             |                                         |
//!
//! The bucket count never changes; the load factor is reported but not
//! managed. Ids must parse as non-negative integers to be inserted. Lookups
//! compare ids textually after hashing, so `"007"` and `"7"` share a bucket
//! but are distinct records.

use std::fmt;
use std::iter::FusedIterator;

use log::{debug, warn};

use crate::catalog::course::Course;
use crate::common::config::SlotIndex;
use crate::common::exception::TableError;
use crate::container::hash_function::HashFunction;
use crate::container::hash_table::HashTable;

/// One link in a bucket's chain.
struct ChainEntry {
    course: Course,
    slot: SlotIndex,
    next: Option<Box<ChainEntry>>,
}

impl ChainEntry {
    fn new(course: Course, slot: SlotIndex) -> Self {
        Self {
            course,
            slot,
            next: None,
        }
    }
}

type Slot = Option<Box<ChainEntry>>;

pub struct ChainedHashTable {
    slots: Vec<Slot>,
    hash_fn: HashFunction,
    len: usize,
}

impl ChainedHashTable {
    /// Creates a table with `bucket_count` empty slots.
    ///
    /// # Returns
    ///
    /// `TableError::InvalidBucketCount` if `bucket_count` is zero.
    pub fn new(bucket_count: usize) -> Result<Self, TableError> {
        let hash_fn = HashFunction::new(bucket_count)?;
        Ok(Self::with_hash_function(hash_fn))
    }

    pub fn with_hash_function(hash_fn: HashFunction) -> Self {
        let mut slots = Vec::with_capacity(hash_fn.bucket_count());
        slots.resize_with(hash_fn.bucket_count(), || None);
        Self {
            slots,
            hash_fn,
            len: 0,
        }
    }

    /// Inserts a course at the tail of its bucket's chain.
    ///
    /// The id must be bare ASCII digits; `" 100"` is rejected rather than
    /// stored as a record distinct from `"100"`. Duplicate ids are not
    /// detected; both records are kept and lookups see the one inserted first.
    pub fn insert(&mut self, course: Course) -> Result<(), TableError> {
        let slot = self.hash_fn.slot_for(course.id())?;

        let mut cursor = &mut self.slots[slot];
        let mut depth = 0usize;
        while let Some(entry) = cursor {
            cursor = &mut entry.next;
            depth += 1;
        }

        debug!(
            "Inserting course {} into slot {} at chain position {}",
            course.id(),
            slot,
            depth
        );
        *cursor = Some(Box::new(ChainEntry::new(course, slot)));
        self.len += 1;
        Ok(())
    }

    /// Looks up a course by exact id.
    ///
    /// Ids that cannot be parsed were never admitted, so they are reported as
    /// absent rather than as an error.
    pub fn find(&self, id: &str) -> Option<&Course> {
        let slot = self.hash_fn.slot_for(id).ok()?;
        self.chain(slot)
            .map(|entry| &entry.course)
            .find(|course| course.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Unlinks the first course with the given id and returns it.
    ///
    /// Returns `None` and leaves the table untouched when no entry matches.
    pub fn remove(&mut self, id: &str) -> Option<Course> {
        let slot = self.hash_fn.slot_for(id).ok()?;

        let mut cursor = &mut self.slots[slot];
        loop {
            match cursor {
                None => {
                    debug!("Course {} not found in slot {}", id, slot);
                    return None;
                }
                Some(entry) if entry.course.id() == id => {
                    let successor = entry.next.take();
                    let removed = std::mem::replace(cursor, successor);
                    self.len -= 1;
                    debug!("Removed course {} from slot {}", id, slot);
                    return removed.map(|entry| entry.course);
                }
                Some(entry) => {
                    cursor = &mut entry.next;
                }
            }
        }
    }

    /// Iterates every stored course in ascending slot order, chain head first.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            slots: self.slots.iter(),
            current: None,
            remaining: self.len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.slots.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.bucket_count() as f64
    }

    /// Number of entries chained in `slot`, or `None` if the slot is out of range.
    pub fn chain_len(&self, slot: SlotIndex) -> Option<usize> {
        (slot < self.slots.len()).then(|| self.chain(slot).count())
    }

    pub fn longest_chain(&self) -> usize {
        (0..self.slots.len())
            .map(|slot| self.chain(slot).count())
            .max()
            .unwrap_or(0)
    }

    pub fn occupied_slots(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Drops every entry. The bucket count is unchanged.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            drop_chain(slot.take());
        }
        self.len = 0;
    }

    /// Checks that every entry sits in the slot its id hashes to and that the
    /// cached length matches the chains.
    pub fn verify_integrity(&self) -> bool {
        let mut counted = 0usize;
        for index in 0..self.slots.len() {
            for entry in self.chain(index) {
                counted += 1;
                let expected = self.hash_fn.slot_for(entry.course.id());
                if entry.slot != index || expected != Ok(index) {
                    warn!(
                        "Course {} stored in slot {} but recorded slot {} (expected {:?})",
                        entry.course.id(),
                        index,
                        entry.slot,
                        expected
                    );
                    return false;
                }
            }
        }
        if counted != self.len {
            warn!("Table length {} does not match {} chained entries", self.len, counted);
            return false;
        }
        true
    }

    fn chain(&self, slot: SlotIndex) -> ChainIter<'_> {
        ChainIter {
            next: self.slots.get(slot).and_then(|head| head.as_deref()),
        }
    }
}

impl Default for ChainedHashTable {
    fn default() -> Self {
        Self::with_hash_function(HashFunction::default())
    }
}

impl HashTable<str, Course> for ChainedHashTable {
    fn insert(&mut self, value: Course) -> Result<(), TableError> {
        ChainedHashTable::insert(self, value)
    }

    fn find(&self, key: &str) -> Option<&Course> {
        ChainedHashTable::find(self, key)
    }

    fn remove(&mut self, key: &str) -> Option<Course> {
        ChainedHashTable::remove(self, key)
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl Drop for ChainedHashTable {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for ChainedHashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedHashTable")
            .field("bucket_count", &self.bucket_count())
            .field("len", &self.len)
            .field("occupied_slots", &self.occupied_slots())
            .finish()
    }
}

impl<'a> IntoIterator for &'a ChainedHashTable {
    type Item = &'a Course;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Unlinks one entry at a time so dropping a long chain does not recurse.
fn drop_chain(mut head: Slot) {
    while let Some(mut entry) = head {
        head = entry.next.take();
    }
}

struct ChainIter<'a> {
    next: Option<&'a ChainEntry>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a ChainEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.next?;
        self.next = entry.next.as_deref();
        Some(entry)
    }
}

/// Borrowing iterator over every course in a [`ChainedHashTable`].
pub struct Iter<'a> {
    slots: std::slice::Iter<'a, Slot>,
    current: Option<&'a ChainEntry>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Course;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current {
                self.current = entry.next.as_deref();
                self.remaining -= 1;
                return Some(&entry.course);
            }
            self.current = self.slots.next()?.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
