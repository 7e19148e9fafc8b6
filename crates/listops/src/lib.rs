//! Listops - Generic filter, transform and group-by helpers for collections.
//!
//! Listops provides three stateless operations over anything that implements
//! [`IntoIterator`]:
//!
//! - [`filter_list`]: keep the elements a predicate accepts
//! - [`transform_list`]: map every element through a function
//! - [`group_by_key`]: partition elements into buckets by an extracted key
//!
//! Each operation has a `try_` form taking a fallible callable. The first
//! error stops iteration and is handed back to the caller unchanged; no
//! partial result is ever returned.
//!
//! # Quick Start
//!
//! ```rust
//! use listops::{filter_list, group_by_key, transform_list};
//!
//! let numbers: Vec<i64> = (1..=10).collect();
//! let evens = filter_list(numbers, |n| n % 2 == 0);
//! assert_eq!(evens, vec![2, 4, 6, 8, 10]);
//!
//! let lengths = transform_list(["apple", "banana"], str::len);
//! assert_eq!(lengths, vec![5, 6]);
//!
//! let words = ["apple", "banana", "cherry", "avocado"];
//! let groups = group_by_key(words, |w| w.chars().next());
//! assert_eq!(groups.get(&Some('a')), Some(&["apple", "avocado"][..]));
//! assert_eq!(groups.len(), 3);
//! ```
//!
//! # Method Syntax
//!
//! The [`ListOps`] extension trait exposes the same operations as methods on
//! every [`IntoIterator`]:
//!
//! ```rust
//! use listops::ListOps;
//! use listops::selectors::first_char;
//!
//! let groups = ["apple", "banana", "avocado"]
//!     .try_group_by_key(first_char)
//!     .unwrap();
//! assert_eq!(groups.keys().collect::<Vec<_>>(), vec![&'a', &'b']);
//! ```
//!
//! # Bucket Order
//!
//! [`Groups`] keeps its keys in first-occurrence order, and every bucket
//! keeps its elements in input order.

mod error;
mod filter;
mod group;
pub mod selectors;
mod traits;
mod transform;

// Re-export public API
pub use error::{Result, SelectorError};
pub use filter::{filter_list, try_filter_list};
pub use group::{group_by_key, try_group_by_key, Groups};
pub use traits::ListOps;
pub use transform::{transform_list, try_transform_list};
