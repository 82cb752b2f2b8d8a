//! The operations as free functions over slices.
//!
//! [`ArrayExt`](crate::ArrayExt) exposes these as methods. Use these
//! directly when you only have a slice (`&[T]` or `&mut [T]`), as the
//! standard library already claims some of these method names on slices.
//!
//! Operations that take `&[T]` never modify their input; `concat`, `filter`
//! and `map` return a new `Vec`. Operations that take `&mut [T]` (`fill`,
//! `reverse`, `sort`) modify in place and hand the same slice back.

use std::ops::{Bound, RangeBounds};

use crate::compare::Comparison;
use crate::error::{self, Error, Op};

/// Concatenate slices into a new `Vec`, in argument order.
pub fn concat<T: Clone>(arrays: &[&[T]]) -> Vec<T> {
    let mut vec = Vec::with_capacity(arrays.iter().map(|array| array.len()).sum());
    for array in arrays {
        vec.extend_from_slice(array);
    }
    vec
}

/// True if `pred` holds for all items. Stops at the first `false`.
pub fn every<T, F>(items: &[T], mut pred: F) -> bool
where
    F: FnMut(&T, usize) -> bool,
{
    for (index, item) in items.iter().enumerate() {
        if !pred(item, index) {
            return false;
        }
    }
    true
}

/// True if `pred` holds for at least one item. Stops at the first `true`.
pub fn some<T, F>(items: &[T], mut pred: F) -> bool
where
    F: FnMut(&T, usize) -> bool,
{
    for (index, item) in items.iter().enumerate() {
        if pred(item, index) {
            return true;
        }
    }
    false
}

/// Overwrite `start..end` with clones of `value`.
///
/// Fails with [`Error::OutOfRange`] if `start > end` or `end > items.len()`,
/// in which case nothing is written.
pub fn fill<T: Clone>(
    items: &mut [T],
    value: T,
    start: usize,
    end: usize,
) -> error::Result<&mut [T]> {
    fill_checked(items, value, start, end, Op::Fill)
}

/// Overwrite a range with clones of `value`.
///
/// `fill_range(items, v, ..)` fills everything, `fill_range(items, v, 2..)`
/// fills from index 2 to the end.
pub fn fill_range<T: Clone>(
    items: &mut [T],
    value: T,
    range: impl RangeBounds<usize>,
) -> error::Result<&mut [T]> {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.saturating_add(1),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => items.len(),
    };
    fill_checked(items, value, start, end, Op::FillRange)
}

fn fill_checked<T: Clone>(
    items: &mut [T],
    value: T,
    start: usize,
    end: usize,
    op: Op,
) -> error::Result<&mut [T]> {
    if start > end || end > items.len() {
        return Err(Error::OutOfRange {
            op,
            start,
            end,
            len: items.len(),
        });
    }
    items[start..end].fill(value);
    Ok(items)
}

/// Clone the items for which `pred` holds into a new `Vec`.
///
/// `pred` is called for every item. The result has capacity for all of
/// `items`.
pub fn filter<T: Clone, F>(items: &[T], mut pred: F) -> Vec<T>
where
    F: FnMut(&T, usize) -> bool,
{
    let mut filtered = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        if pred(item, index) {
            filtered.push(item.clone());
        }
    }
    filtered
}

/// The first item for which `pred` holds.
pub fn find<T, F>(items: &[T], pred: F) -> Option<&T>
where
    F: FnMut(&T, usize) -> bool,
{
    find_index(items, pred).map(|index| &items[index])
}

/// The index of the first item for which `pred` holds.
pub fn find_index<T, F>(items: &[T], mut pred: F) -> Option<usize>
where
    F: FnMut(&T, usize) -> bool,
{
    for (index, item) in items.iter().enumerate() {
        if pred(item, index) {
            return Some(index);
        }
    }
    None
}

/// Call `f` with every item and its index, in order.
pub fn for_each<T, F>(items: &[T], mut f: F)
where
    F: FnMut(&T, usize),
{
    for (index, item) in items.iter().enumerate() {
        f(item, index);
    }
}

/// True if an item equals `value`.
pub fn includes<T: PartialEq>(items: &[T], value: &T) -> bool {
    some(items, |item, _| item == value)
}

/// The index of the first item equal to `value`.
pub fn index_of<T: PartialEq>(items: &[T], value: &T) -> Option<usize> {
    find_index(items, |item, _| item == value)
}

/// The index of the last item equal to `value`.
pub fn last_index_of<T: PartialEq>(items: &[T], value: &T) -> Option<usize> {
    items.iter().rposition(|item| item == value)
}

/// Transform every item into a new `Vec` of the same length.
pub fn map<T, R, F>(items: &[T], mut f: F) -> Vec<R>
where
    F: FnMut(&T, usize) -> R,
{
    let mut mapped = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        mapped.push(f(item, index));
    }
    mapped
}

/// Fold from left to right, starting with `initial`.
pub fn reduce<T, A, F>(items: &[T], mut f: F, initial: A) -> A
where
    F: FnMut(A, &T, usize) -> A,
{
    let mut accumulator = initial;
    for (index, item) in items.iter().enumerate() {
        accumulator = f(accumulator, item, index);
    }
    accumulator
}

/// Fold from right to left, starting with `initial`.
pub fn reduce_right<T, A, F>(items: &[T], mut f: F, initial: A) -> A
where
    F: FnMut(A, &T, usize) -> A,
{
    let mut accumulator = initial;
    for (index, item) in items.iter().enumerate().rev() {
        accumulator = f(accumulator, item, index);
    }
    accumulator
}

/// Reverse in place by swapping pairs from both ends toward the middle.
pub fn reverse<T>(items: &mut [T]) -> &mut [T] {
    let len = items.len();
    for index in 0..(len / 2) {
        items.swap(index, len - index - 1);
    }
    items
}

/// Sort in place with a three-way comparator. The sort is stable.
///
/// The comparator must describe a total order; if it doesn't the
/// resulting order is unspecified and the standard library may panic.
pub fn sort<T, C, F>(items: &mut [T], mut compare: F) -> &mut [T]
where
    C: Comparison,
    F: FnMut(&T, &T) -> C,
{
    items.sort_by(|a, b| compare(a, b).to_ordering());
    items
}

/// Sort in place with a three-way comparator, without preserving the
/// order of equal items.
pub fn sort_unstable<T, C, F>(items: &mut [T], mut compare: F) -> &mut [T]
where
    C: Comparison,
    F: FnMut(&T, &T) -> C,
{
    items.sort_unstable_by(|a, b| compare(a, b).to_ordering());
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_nothing() {
        let empty: Vec<i32> = concat(&[]);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_concat_capacity() {
        let a = [1, 2];
        let b = [3];
        let joined = concat(&[&a[..], &b[..], &[]]);
        assert_eq!(joined, vec![1, 2, 3]);
        assert_eq!(joined.capacity(), 3);
    }

    #[test]
    fn test_fill_on_slice() {
        let mut items = [0; 4];
        let filled = fill(&mut items[..], 9, 2, 4).unwrap();
        assert_eq!(filled, &[0, 0, 9, 9]);
    }

    #[test]
    fn test_fill_empty_range() {
        let mut items = [1, 2, 3];
        fill(&mut items, 0, 1, 1).unwrap();
        fill(&mut items, 0, 3, 3).unwrap();
        assert_eq!(items, [1, 2, 3]);
    }

    #[test]
    fn test_fill_start_after_end() {
        let mut items = [1, 2, 3];
        assert_eq!(
            fill(&mut items, 0, 2, 1),
            Err(Error::OutOfRange {
                op: Op::Fill,
                start: 2,
                end: 1,
                len: 3
            })
        );
        assert_eq!(items, [1, 2, 3]);
    }

    #[test]
    fn test_fill_end_past_len() {
        let mut items = [1, 2, 3];
        assert!(fill(&mut items, 0, 0, 4).is_err());
        assert_eq!(items, [1, 2, 3]);
    }

    #[test]
    fn test_fill_range_bounds() {
        let mut items = [0; 5];
        fill_range(&mut items, 1, ..).unwrap();
        assert_eq!(items, [1; 5]);
        fill_range(&mut items, 2, 3..).unwrap();
        assert_eq!(items, [1, 1, 1, 2, 2]);
        fill_range(&mut items, 3, ..=1).unwrap();
        assert_eq!(items, [3, 3, 1, 2, 2]);
        fill_range(&mut items, 4, (Bound::Excluded(0), Bound::Excluded(2))).unwrap();
        assert_eq!(items, [3, 4, 1, 2, 2]);
    }

    #[test]
    fn test_fill_range_out_of_bounds() {
        let mut items = [0; 2];
        assert_eq!(
            fill_range(&mut items, 1, ..=2),
            Err(Error::OutOfRange {
                op: Op::FillRange,
                start: 0,
                end: 3,
                len: 2
            })
        );
        assert!(fill_range(&mut items, 1, (Bound::Excluded(usize::MAX), Bound::Unbounded)).is_err());
    }

    #[test]
    fn test_find_index_absent() {
        assert_eq!(find_index(&[1, 2, 3], |item, _| *item > 5), None);
    }

    #[test]
    fn test_last_index_of() {
        let items = [1, 2, 1, 2];
        assert_eq!(last_index_of(&items, &2), Some(3));
        assert_eq!(last_index_of(&items, &1), Some(2));
        assert_eq!(last_index_of(&items, &3), None);
        assert_eq!(last_index_of::<i32>(&[], &3), None);
    }

    #[test]
    fn test_reduce_right_indexes() {
        let visited = reduce_right(
            &["a", "b", "c"],
            |mut acc: Vec<usize>, _, index| {
                acc.push(index);
                acc
            },
            Vec::new(),
        );
        assert_eq!(visited, vec![2, 1, 0]);
    }

    #[test]
    fn test_reverse_odd_and_even() {
        let mut odd = [1, 2, 3];
        reverse(&mut odd);
        assert_eq!(odd, [3, 2, 1]);
        let mut even = [1, 2, 3, 4];
        reverse(&mut even);
        assert_eq!(even, [4, 3, 2, 1]);
        let mut empty: [i32; 0] = [];
        reverse(&mut empty);
    }

    #[test]
    fn test_sort_unstable() {
        let mut items = [4, 3, 1, 5, 2];
        sort_unstable(&mut items, |a, b| b - a);
        assert_eq!(items, [5, 4, 3, 2, 1]);
    }
}
