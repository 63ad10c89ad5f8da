// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered key sets with change tracking.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashSet;

/// A set of selected keys with stable insertion order and a revision counter.
///
/// Keys live in a `Vec<T>` for ordered iteration, with a hashed index for
/// constant-time membership. The revision bumps only when the contents change,
/// so repeated selection passes that settle on the same result are observable as
/// "nothing changed".
#[derive(Clone, Debug)]
pub struct ItemSet<T> {
    items: Vec<T>,
    index: HashSet<T>,
    revision: u64,
}

impl<T> Default for ItemSet<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashSet::new(),
            revision: 0,
        }
    }
}

impl<T> ItemSet<T> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns all keys in insertion order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the keys in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the revision counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.index.clear();
        self.bump_revision();
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T> ItemSet<T>
where
    T: Copy + Eq + Hash,
{
    /// Returns `true` if `key` is in the set.
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        self.index.contains(key)
    }

    /// Adds `key`. Returns `true` if it was not present.
    pub fn add(&mut self, key: T) -> bool {
        if !self.index.insert(key) {
            return false;
        }
        self.items.push(key);
        self.bump_revision();
        true
    }

    /// Removes `key`. Returns `true` if it was present.
    pub fn remove(&mut self, key: &T) -> bool {
        if !self.index.remove(key) {
            return false;
        }
        if let Some(idx) = self.items.iter().position(|k| k == key) {
            self.items.remove(idx);
        }
        self.bump_revision();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::ItemSet;

    #[test]
    fn add_remove_and_revision() {
        let mut set = ItemSet::new();
        assert!(set.is_empty());
        assert_eq!(set.revision(), 0);

        assert!(set.add(3_u32));
        assert!(set.add(1));
        assert!(!set.add(3));
        assert_eq!(set.items(), &[3, 1]);
        assert_eq!(set.revision(), 2);

        assert!(!set.remove(&9));
        assert_eq!(set.revision(), 2);
        assert!(set.remove(&3));
        assert_eq!(set.items(), &[1]);
        assert!(!set.contains(&3));
        assert_eq!(set.revision(), 3);
    }

    #[test]
    fn clear_bumps_revision_only_when_nonempty() {
        let mut set = ItemSet::<u32>::new();

        let before = set.revision();
        set.clear();
        assert_eq!(set.revision(), before, "clearing an empty set is a no-op");

        set.add(1);
        set.add(2);
        set.clear();
        assert_eq!(set.len(), 0);
        assert!(set.revision() > before);
    }
}
