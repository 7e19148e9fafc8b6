//! Element-wise transformation.

use log::trace;

/// Maps every element of `input` through `transform`.
///
/// The output has exactly one entry per input element, in input order.
///
/// # Example
///
/// ```
/// use listops::transform_list;
///
/// assert_eq!(transform_list(["apple", "banana"], str::len), vec![5, 6]);
/// ```
pub fn transform_list<I, F, U>(input: I, transform: F) -> Vec<U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    input.into_iter().map(transform).collect()
}

/// Like [`transform_list`], but with a fallible function.
///
/// Iteration stops at the first `Err`, which is returned unchanged.
pub fn try_transform_list<I, F, U, E>(input: I, mut transform: F) -> Result<Vec<U>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<U, E>,
{
    let iter = input.into_iter();
    let mut mapped = Vec::with_capacity(iter.size_hint().0);
    for item in iter {
        match transform(item) {
            Ok(value) => mapped.push(value),
            Err(err) => {
                trace!("transform failed at element {}", mapped.len());
                return Err(err);
            }
        }
    }
    Ok(mapped)
}
