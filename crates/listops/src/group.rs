//! Grouping by key.
//!
//! [`group_by_key`] partitions a sequence into [`Groups`]: an
//! insertion-ordered map from key to the bucket of elements sharing it.

use std::hash::Hash;

use indexmap::map::{self, Entry};
use indexmap::{Equivalent, IndexMap};
use log::trace;
use serde::Serialize;

/// Buckets of elements keyed by a grouping key.
///
/// Keys are kept in the order they were first seen in the input, and each
/// bucket holds its elements in input order. A key is present only if at
/// least one element produced it, so no bucket is ever empty.
///
/// Equality compares keys and buckets but ignores key order, matching
/// [`IndexMap`]'s own `PartialEq`.
///
/// Serializes as a map, so JSON output is an object with one array per key.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Groups<K, T> {
    buckets: IndexMap<K, Vec<T>>,
}

impl<K, T> Groups<K, T>
where
    K: Hash + Eq,
{
    /// Creates an empty set of groups.
    pub fn new() -> Self {
        Groups {
            buckets: IndexMap::new(),
        }
    }

    fn push(&mut self, key: K, item: T) {
        match self.buckets.entry(key) {
            Entry::Occupied(mut bucket) => bucket.get_mut().push(item),
            Entry::Vacant(slot) => {
                trace!("opening bucket #{}", slot.index());
                slot.insert(vec![item]);
            }
        }
    }

    /// Returns the bucket for `key`, if any element produced it.
    pub fn get<Q>(&self, key: &Q) -> Option<&[T]>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.buckets.get(key).map(Vec::as_slice)
    }

    /// Returns `true` if some element produced `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.buckets.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `true` if there are no buckets.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of elements across all buckets.
    ///
    /// Always equals the length of the grouped input.
    pub fn total_len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Keys in first-occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.buckets.keys()
    }

    /// Buckets in first-occurrence order of their keys.
    pub fn buckets(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.buckets.values().map(Vec::as_slice)
    }

    /// Key and bucket pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[T])> + '_ {
        self.buckets.iter().map(|(key, bucket)| (key, bucket.as_slice()))
    }

    /// Consumes the groups, returning the underlying ordered map.
    pub fn into_inner(self) -> IndexMap<K, Vec<T>> {
        self.buckets
    }
}

impl<K, T> Default for Groups<K, T>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Groups::new()
    }
}

impl<K, T> PartialEq for Groups<K, T>
where
    K: Hash + Eq,
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.buckets == other.buckets
    }
}

impl<K, T> Eq for Groups<K, T>
where
    K: Hash + Eq,
    T: Eq,
{
}

impl<K, T> From<Groups<K, T>> for IndexMap<K, Vec<T>> {
    fn from(groups: Groups<K, T>) -> Self {
        groups.buckets
    }
}

impl<K, T> IntoIterator for Groups<K, T> {
    type Item = (K, Vec<T>);
    type IntoIter = map::IntoIter<K, Vec<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}

impl<'a, K, T> IntoIterator for &'a Groups<K, T> {
    type Item = (&'a K, &'a Vec<T>);
    type IntoIter = map::Iter<'a, K, Vec<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}

/// Partitions `input` into buckets keyed by `key_selector`.
///
/// Elements whose keys compare equal land in the same bucket, in the order
/// they appear in `input`.
///
/// # Example
///
/// ```
/// use listops::group_by_key;
///
/// let groups = group_by_key(vec![1, 2, 3, 4, 5], |n| n % 2 == 0);
/// assert_eq!(groups.get(&false), Some(&[1, 3, 5][..]));
/// assert_eq!(groups.get(&true), Some(&[2, 4][..]));
/// ```
pub fn group_by_key<I, F, K>(input: I, mut key_selector: F) -> Groups<K, I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: Hash + Eq,
{
    let mut groups = Groups::new();
    for item in input {
        let key = key_selector(&item);
        groups.push(key, item);
    }
    groups
}

/// Like [`group_by_key`], but with a fallible key selector.
///
/// The first `Err` is returned unchanged and every bucket built up to that
/// point is dropped.
///
/// # Example
///
/// ```
/// use listops::{try_group_by_key, SelectorError};
/// use listops::selectors::first_char;
///
/// let result = try_group_by_key(["apple", "", "banana"], first_char);
/// assert_eq!(result, Err(SelectorError::EmptyString));
/// ```
pub fn try_group_by_key<I, F, K, E>(
    input: I,
    mut key_selector: F,
) -> Result<Groups<K, I::Item>, E>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> Result<K, E>,
    K: Hash + Eq,
{
    let mut groups = Groups::new();
    for item in input {
        match key_selector(&item) {
            Ok(key) => groups.push(key, item),
            Err(err) => {
                trace!(
                    "key selector failed after {} elements, dropping {} buckets",
                    groups.total_len(),
                    groups.len()
                );
                return Err(err);
            }
        }
    }
    Ok(groups)
}
