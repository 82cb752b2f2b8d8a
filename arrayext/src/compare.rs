use std::cmp::Ordering;

/// The result of a comparator.
///
/// A comparator may return an [`Ordering`] directly, or a signed integer
/// where negative means less, zero means equal and positive means greater.
pub trait Comparison {
    fn to_ordering(self) -> Ordering;
}

impl Comparison for Ordering {
    #[inline]
    fn to_ordering(self) -> Ordering {
        self
    }
}

macro_rules! signed_comparison {
    ($($t:ty),*) => {
        $(
            impl Comparison for $t {
                #[inline]
                fn to_ordering(self) -> Ordering {
                    self.cmp(&0)
                }
            }
        )*
    };
}

signed_comparison!(i8, i16, i32, i64, i128, isize);
