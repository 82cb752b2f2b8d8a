use crate::array_core::ArrayCore;
use crate::compare::Comparison;
use crate::{error, ops};

/// Array prototype operations on top of [`ArrayCore`].
///
/// Methods taking `&self` leave the sequence alone; the ones that build
/// something (`concat`, `filter`, `map`) return a new `Vec`. Methods taking
/// `&mut self` (`fill`, `fill_range`, `reverse`, `sort`, `sort_unstable`)
/// modify the sequence in place and return it, so calls can be chained.
///
/// Callbacks receive the item and its index.
pub trait ArrayExt: ArrayCore {
    /// Concatenate this sequence with `others` into a new `Vec`.
    fn concat(&self, others: &[&[Self::Item]]) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        let mut arrays = Vec::with_capacity(others.len() + 1);
        arrays.push(self.items());
        arrays.extend_from_slice(others);
        ops::concat(&arrays)
    }

    /// True if `pred` holds for every item.
    ///
    /// Items are visited in order and the first `false` stops the
    /// traversal. An empty sequence gives `true`.
    fn every<F>(&self, pred: F) -> bool
    where
        F: FnMut(&Self::Item, usize) -> bool,
    {
        ops::every(self.items(), pred)
    }

    /// True if `pred` holds for at least one item.
    ///
    /// The first `true` stops the traversal. An empty sequence gives
    /// `false`.
    fn some<F>(&self, pred: F) -> bool
    where
        F: FnMut(&Self::Item, usize) -> bool,
    {
        ops::some(self.items(), pred)
    }

    /// Overwrite the items from `start` up to (not including) `end` with
    /// clones of `value`.
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) without
    /// touching anything if `start > end` or `end` is past the length.
    fn fill(&mut self, value: Self::Item, start: usize, end: usize) -> error::Result<&mut Self>
    where
        Self::Item: Clone,
    {
        ops::fill(self.items_mut(), value, start, end)?;
        Ok(self)
    }

    /// Like [`fill`](ArrayExt::fill), with a Rust range.
    fn fill_range(
        &mut self,
        value: Self::Item,
        range: impl std::ops::RangeBounds<usize>,
    ) -> error::Result<&mut Self>
    where
        Self::Item: Clone,
    {
        ops::fill_range(self.items_mut(), value, range)?;
        Ok(self)
    }

    /// A new `Vec` with the items for which `pred` holds.
    ///
    /// `pred` sees every item; there is no early exit.
    fn filter<F>(&self, pred: F) -> Vec<Self::Item>
    where
        Self::Item: Clone,
        F: FnMut(&Self::Item, usize) -> bool,
    {
        ops::filter(self.items(), pred)
    }

    /// The first item for which `pred` holds.
    fn find<F>(&self, pred: F) -> Option<&Self::Item>
    where
        F: FnMut(&Self::Item, usize) -> bool,
    {
        ops::find(self.items(), pred)
    }

    /// The index of the first item for which `pred` holds.
    fn find_index<F>(&self, pred: F) -> Option<usize>
    where
        F: FnMut(&Self::Item, usize) -> bool,
    {
        ops::find_index(self.items(), pred)
    }

    fn for_each<F>(&self, f: F)
    where
        F: FnMut(&Self::Item, usize),
    {
        ops::for_each(self.items(), f)
    }

    /// True if an item is equal to `value`.
    fn includes(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        ops::includes(self.items(), value)
    }

    fn index_of(&self, value: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        ops::index_of(self.items(), value)
    }

    fn last_index_of(&self, value: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        ops::last_index_of(self.items(), value)
    }

    /// A new `Vec` of the same length, with `f` applied to each item.
    fn map<R, F>(&self, f: F) -> Vec<R>
    where
        F: FnMut(&Self::Item, usize) -> R,
    {
        ops::map(self.items(), f)
    }

    /// Left fold. An empty sequence returns `initial` as is.
    fn reduce<A, F>(&self, f: F, initial: A) -> A
    where
        F: FnMut(A, &Self::Item, usize) -> A,
    {
        ops::reduce(self.items(), f, initial)
    }

    /// Right fold: like [`reduce`](ArrayExt::reduce) starting from the last
    /// item.
    fn reduce_right<A, F>(&self, f: F, initial: A) -> A
    where
        F: FnMut(A, &Self::Item, usize) -> A,
    {
        ops::reduce_right(self.items(), f, initial)
    }

    /// Reverse in place.
    fn reverse(&mut self) -> &mut Self {
        ops::reverse(self.items_mut());
        self
    }

    /// Stable sort in place.
    ///
    /// The comparator returns an [`Ordering`](std::cmp::Ordering) or a
    /// signed integer, see [`Comparison`].
    fn sort<C, F>(&mut self, compare: F) -> &mut Self
    where
        C: Comparison,
        F: FnMut(&Self::Item, &Self::Item) -> C,
    {
        ops::sort(self.items_mut(), compare);
        self
    }

    /// Unstable sort in place.
    fn sort_unstable<C, F>(&mut self, compare: F) -> &mut Self
    where
        C: Comparison,
        F: FnMut(&Self::Item, &Self::Item) -> C,
    {
        ops::sort_unstable(self.items_mut(), compare);
        self
    }
}

impl<A: ArrayCore> ArrayExt for A {}
