//! Ready-made predicates, transforms and key selectors.
//!
//! These are plain functions, so they can be passed straight to the list
//! operations without a closure:
//!
//! ```
//! use listops::{filter_list, transform_list, try_group_by_key};
//! use listops::selectors::{char_count, first_char, is_even};
//!
//! let evens = filter_list(vec![1i64, 2, 3, 4], is_even);
//! assert_eq!(evens, vec![2, 4]);
//!
//! let lengths = transform_list(["груша", "fig"], char_count);
//! assert_eq!(lengths, vec![5, 3]);
//!
//! let groups = try_group_by_key(["fig", "grape", "guava"], first_char).unwrap();
//! assert_eq!(groups.get(&'g'), Some(&["grape", "guava"][..]));
//! ```

use crate::error::{Result, SelectorError};

/// Returns `true` for even numbers.
pub fn is_even(n: &i64) -> bool {
    n % 2 == 0
}

/// Number of characters in a string.
///
/// Counts Unicode scalar values rather than bytes, so `"яблоко"` has
/// length 6.
pub fn char_count<S>(value: &S) -> usize
where
    S: AsRef<str> + ?Sized,
{
    value.as_ref().chars().count()
}

/// First character of a string.
///
/// Fails with [`SelectorError::EmptyString`] when the string is empty.
pub fn first_char<S>(value: &S) -> Result<char>
where
    S: AsRef<str> + ?Sized,
{
    value
        .as_ref()
        .chars()
        .next()
        .ok_or(SelectorError::EmptyString)
}
