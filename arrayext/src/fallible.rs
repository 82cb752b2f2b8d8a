use crate::array_core::ArrayCore;

/// Variants of the callback operations where the callback can fail.
///
/// The traversal order and early exits are the same as in
/// [`ArrayExt`](crate::ArrayExt). On top of that the first `Err` returned by
/// the callback stops the traversal and is handed back to the caller.
/// Whatever the callback did before that stays done.
pub trait TryArrayExt: ArrayCore {
    fn try_every<E, F>(&self, mut pred: F) -> Result<bool, E>
    where
        F: FnMut(&Self::Item, usize) -> Result<bool, E>,
    {
        for (index, item) in self.items().iter().enumerate() {
            if !pred(item, index)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn try_some<E, F>(&self, mut pred: F) -> Result<bool, E>
    where
        F: FnMut(&Self::Item, usize) -> Result<bool, E>,
    {
        for (index, item) in self.items().iter().enumerate() {
            if pred(item, index)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn try_find<E, F>(&self, pred: F) -> Result<Option<&Self::Item>, E>
    where
        F: FnMut(&Self::Item, usize) -> Result<bool, E>,
    {
        let index = self.try_find_index(pred)?;
        Ok(index.map(|index| &self.items()[index]))
    }

    fn try_find_index<E, F>(&self, mut pred: F) -> Result<Option<usize>, E>
    where
        F: FnMut(&Self::Item, usize) -> Result<bool, E>,
    {
        for (index, item) in self.items().iter().enumerate() {
            if pred(item, index)? {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }

    fn try_for_each<E, F>(&self, mut f: F) -> Result<(), E>
    where
        F: FnMut(&Self::Item, usize) -> Result<(), E>,
    {
        for (index, item) in self.items().iter().enumerate() {
            f(item, index)?;
        }
        Ok(())
    }

    fn try_filter<E, F>(&self, mut pred: F) -> Result<Vec<Self::Item>, E>
    where
        Self::Item: Clone,
        F: FnMut(&Self::Item, usize) -> Result<bool, E>,
    {
        let items = self.items();
        let mut filtered = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if pred(item, index)? {
                filtered.push(item.clone());
            }
        }
        Ok(filtered)
    }

    fn try_map<R, E, F>(&self, mut f: F) -> Result<Vec<R>, E>
    where
        F: FnMut(&Self::Item, usize) -> Result<R, E>,
    {
        // collecting into a Result stops at the first error
        self.items()
            .iter()
            .enumerate()
            .map(|(index, item)| f(item, index))
            .collect()
    }

    fn try_reduce<A, E, F>(&self, mut f: F, initial: A) -> Result<A, E>
    where
        F: FnMut(A, &Self::Item, usize) -> Result<A, E>,
    {
        let mut accumulator = initial;
        for (index, item) in self.items().iter().enumerate() {
            accumulator = f(accumulator, item, index)?;
        }
        Ok(accumulator)
    }

    fn try_reduce_right<A, E, F>(&self, mut f: F, initial: A) -> Result<A, E>
    where
        F: FnMut(A, &Self::Item, usize) -> Result<A, E>,
    {
        let mut accumulator = initial;
        for (index, item) in self.items().iter().enumerate().rev() {
            accumulator = f(accumulator, item, index)?;
        }
        Ok(accumulator)
    }
}

impl<A: ArrayCore> TryArrayExt for A {}
