/// The core array interface: a sequence must implement this to function.
///
/// If you do, [`ArrayExt`](crate::ArrayExt) and
/// [`TryArrayExt`](crate::TryArrayExt) provide the whole of the operations
/// on top of it.
///
/// This is implemented for `Vec<T>` and `Box<[T]>`. Plain slices and
/// arrays are left out on purpose: the standard library already has
/// inherent `fill`, `reverse`, `sort` and `map` methods on them which
/// would shadow the ones here. Use the functions in [`ops`](crate::ops)
/// for those.
pub trait ArrayCore {
    /// The element type.
    type Item;

    /// Borrow the items as a slice.
    fn items(&self) -> &[Self::Item];

    /// Borrow the items as a mutable slice.
    fn items_mut(&mut self) -> &mut [Self::Item];
}

impl<T> ArrayCore for Vec<T> {
    type Item = T;

    #[inline]
    fn items(&self) -> &[T] {
        self.as_slice()
    }

    #[inline]
    fn items_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> ArrayCore for Box<[T]> {
    type Item = T;

    #[inline]
    fn items(&self) -> &[T] {
        self
    }

    #[inline]
    fn items_mut(&mut self) -> &mut [T] {
        self
    }
}
