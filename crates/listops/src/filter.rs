//! Predicate filtering.

use log::trace;

/// Returns the elements of `input` for which `predicate` holds.
///
/// Relative order is preserved. Borrowed input (`&[T]`, `&Vec<T>`) is left
/// untouched and yields references; owned input is consumed.
///
/// # Example
///
/// ```
/// use listops::filter_list;
///
/// let numbers = vec![1, 2, 3, 4, 5, 6];
/// let evens = filter_list(&numbers, |n| **n % 2 == 0);
/// assert_eq!(evens, vec![&2, &4, &6]);
/// assert_eq!(numbers.len(), 6);
/// ```
pub fn filter_list<I, P>(input: I, mut predicate: P) -> Vec<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    input.into_iter().filter(|item| predicate(item)).collect()
}

/// Like [`filter_list`], but with a fallible predicate.
///
/// The first `Err` stops iteration and is returned as-is; elements after
/// the failing one are never passed to `predicate`.
///
/// # Example
///
/// ```
/// use listops::try_filter_list;
///
/// let raw = ["1", "22", "x", "333"];
/// let err = try_filter_list(raw, |s| s.parse::<u32>().map(|n| n > 10));
/// assert!(err.is_err());
/// ```
pub fn try_filter_list<I, P, E>(input: I, mut predicate: P) -> Result<Vec<I::Item>, E>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> Result<bool, E>,
{
    let mut kept = Vec::new();
    for (index, item) in input.into_iter().enumerate() {
        match predicate(&item) {
            Ok(true) => kept.push(item),
            Ok(false) => {}
            Err(err) => {
                trace!("predicate failed at element {index}, discarding {} kept", kept.len());
                return Err(err);
            }
        }
    }
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_matching_elements_in_order() {
        let numbers: Vec<i32> = (1..=10).collect();
        let evens = filter_list(numbers, |n| n % 2 == 0);
        assert_eq!(evens, vec![2, 4, 6, 8, 10]);
    }

    #[test]
    fn borrowed_input_is_not_mutated() {
        let words = vec!["a".to_string(), "bb".to_string(), "ccc".to_string()];
        let long = filter_list(&words, |w| w.len() > 1);
        assert_eq!(long, vec![&words[1], &words[2]]);
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn always_true_keeps_everything() {
        let items = vec![3, 1, 2];
        assert_eq!(filter_list(items.clone(), |_| true), items);
    }

    #[test]
    fn always_false_keeps_nothing() {
        let items = vec![3, 1, 2];
        assert!(filter_list(items, |_| false).is_empty());
    }

    #[test]
    fn empty_input() {
        let empty: Vec<u8> = Vec::new();
        assert!(filter_list(empty, |_| true).is_empty());
    }

    #[test]
    fn try_filter_ok() {
        let result: Result<Vec<i32>, String> = try_filter_list(vec![1, 2, 3, 4], |n| Ok(*n > 2));
        assert_eq!(result, Ok(vec![3, 4]));
    }

    #[test]
    fn try_filter_stops_at_first_error() {
        let mut visited = Vec::new();
        let result = try_filter_list(vec![1, 2, 3, 4], |n| {
            visited.push(*n);
            if *n == 2 {
                Err("boom")
            } else {
                Ok(true)
            }
        });

        assert_eq!(result, Err("boom"));
        assert_eq!(visited, vec![1, 2]);
    }
}
