//! Array prototype style operations for Rust sequences.
//!
//! This crate offers the familiar `map`, `filter`, `reduce`, `find`, `sort`
//! family of array operations, with callbacks that also receive the index
//! of the item.
//!
//! Bring [`ArrayExt`] into scope to use them as methods on `Vec<T>` and
//! `Box<[T]>`:
//!
//! ```rust
//! use arrayext::ArrayExt;
//!
//! let mut numbers = vec![4, 3, 1, 5, 2];
//! numbers.sort(|a, b| a - b);
//! assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
//!
//! let evens = numbers.filter(|n, _| n % 2 == 0);
//! assert_eq!(evens, vec![2, 4]);
//!
//! let total = numbers.reduce(|acc, n, _| acc + n, 0);
//! assert_eq!(total, 15);
//!
//! assert_eq!(numbers.index_of(&3), Some(2));
//! assert_eq!(numbers.index_of(&8), None);
//! ```
//!
//! Operations that build a result (`concat`, `filter`, `map`) return a new
//! `Vec` and leave their input alone. Operations that take `&mut self`
//! (`fill`, `reverse`, `sort`) change the sequence in place and return it:
//!
//! ```rust
//! use arrayext::ArrayExt;
//!
//! let mut letters = vec!['a', 'b', 'c', 'd', 'e'];
//! letters.fill('x', 1, 4)?.reverse();
//! assert_eq!(letters, vec!['e', 'x', 'x', 'x', 'a']);
//!
//! assert!(letters.fill('y', 4, 2).is_err());
//! # Ok::<(), arrayext::Error>(())
//! ```
//!
//! For plain slices and arrays, use the functions in [`ops`].
//!
//! When a callback can fail, use [`TryArrayExt`]: the first error stops
//! the traversal and is returned.

mod array_core;
mod compare;
mod error;
mod fallible;
pub mod ops;
mod traits;

pub use array_core::ArrayCore;
pub use compare::Comparison;
pub use error::{Error, Op, Result};
pub use fallible::TryArrayExt;
pub use ops::concat;
pub use traits::ArrayExt;

/// Concatenate any number of sequences into a new `Vec`.
///
/// Accepts anything that is `AsRef<[T]>`: vectors, arrays, slices.
///
/// ```rust
/// let a = vec![1, 2];
/// let joined = arrayext::concat_arrays![a, [3], &[4, 5][..]];
/// assert_eq!(joined, vec![1, 2, 3, 4, 5]);
/// ```
#[macro_export]
macro_rules! concat_arrays {
    ($($array:expr),* $(,)?) => {
        $crate::concat(&[$(::core::convert::AsRef::<[_]>::as_ref(&$array)),*])
    };
}
