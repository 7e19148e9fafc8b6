//! Method-syntax access to the list operations.
//!
//! This module provides the [`ListOps`] extension trait, implemented for
//! every [`IntoIterator`], so the free functions can be chained onto a
//! collection or iterator expression.

use std::hash::Hash;

use crate::group::Groups;

/// Extension trait exposing the list operations as methods.
///
/// Every method forwards to the free function of the same name and has the
/// same semantics. The receiver is taken by value: call it on `&vec` or
/// `vec.iter()` to keep the original collection.
///
/// # Example
///
/// ```
/// use listops::ListOps;
///
/// let words = vec!["apple", "banana", "cherry", "avocado"];
///
/// let long = words.iter().filter_list(|w| w.len() > 5);
/// assert_eq!(long, vec![&"banana", &"cherry", &"avocado"]);
///
/// let lengths = words.iter().transform_list(|w| w.len());
/// assert_eq!(lengths, vec![5, 6, 6, 7]);
///
/// let groups = words.group_by_key(|w| w.len());
/// assert_eq!(groups.get(&6), Some(&["banana", "cherry"][..]));
/// ```
pub trait ListOps: IntoIterator + Sized {
    /// See [`crate::filter_list`].
    fn filter_list<P>(self, predicate: P) -> Vec<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        crate::filter::filter_list(self, predicate)
    }

    /// See [`crate::try_filter_list`].
    fn try_filter_list<P, E>(self, predicate: P) -> Result<Vec<Self::Item>, E>
    where
        P: FnMut(&Self::Item) -> Result<bool, E>,
    {
        crate::filter::try_filter_list(self, predicate)
    }

    /// See [`crate::transform_list`].
    fn transform_list<F, U>(self, transform: F) -> Vec<U>
    where
        F: FnMut(Self::Item) -> U,
    {
        crate::transform::transform_list(self, transform)
    }

    /// See [`crate::try_transform_list`].
    fn try_transform_list<F, U, E>(self, transform: F) -> Result<Vec<U>, E>
    where
        F: FnMut(Self::Item) -> Result<U, E>,
    {
        crate::transform::try_transform_list(self, transform)
    }

    /// See [`crate::group_by_key`].
    fn group_by_key<F, K>(self, key_selector: F) -> Groups<K, Self::Item>
    where
        F: FnMut(&Self::Item) -> K,
        K: Hash + Eq,
    {
        crate::group::group_by_key(self, key_selector)
    }

    /// See [`crate::try_group_by_key`].
    fn try_group_by_key<F, K, E>(self, key_selector: F) -> Result<Groups<K, Self::Item>, E>
    where
        F: FnMut(&Self::Item) -> Result<K, E>,
        K: Hash + Eq,
    {
        crate::group::try_group_by_key(self, key_selector)
    }
}

impl<I> ListOps for I where I: IntoIterator {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selectors::{char_count, first_char, is_even};
    use crate::SelectorError;

    #[test]
    fn methods_match_free_functions() {
        let numbers: Vec<i64> = (1..=10).collect();

        assert_eq!(
            numbers.clone().filter_list(is_even),
            crate::filter_list(numbers.clone(), is_even)
        );
        assert_eq!(
            numbers.iter().transform_list(|n| n * 2),
            crate::transform_list(&numbers, |n| n * 2)
        );
        assert_eq!(
            numbers.iter().group_by_key(|n| **n > 5),
            crate::group_by_key(&numbers, |n| **n > 5)
        );
    }

    #[test]
    fn chained_pipeline() {
        let words = ["kiwi", "", "plum", "pear", "fig"];
        let groups = words
            .iter()
            .copied()
            .filter_list(|w| !w.is_empty())
            .try_group_by_key(first_char)
            .unwrap();

        assert_eq!(groups.keys().collect::<Vec<_>>(), vec![&'k', &'p', &'f']);
        assert_eq!(groups.get(&'p'), Some(&["plum", "pear"][..]));
    }

    #[test]
    fn fallible_methods_propagate() {
        let err = ["ok", ""].try_group_by_key(first_char).unwrap_err();
        assert_eq!(err, SelectorError::EmptyString);

        let lengths = ["ёж", "ant"].try_transform_list(|w| Ok::<_, ()>(char_count(w)));
        assert_eq!(lengths, Ok(vec![2, 3]));

        let kept = [1i64, 2, 3].try_filter_list(|n| if *n < 3 { Ok(true) } else { Err(*n) });
        assert_eq!(kept, Err(3));
    }
}
