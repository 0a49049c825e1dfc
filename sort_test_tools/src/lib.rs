use std::cmp::Ordering;

pub trait Sort {
    /// `false` for implementations that sort a private copy and leave the input as it was.
    const IN_PLACE: bool = true;

    /// `true` if equal elements keep their relative order.
    const STABLE: bool = false;

    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;
}

pub trait Search {
    /// `true` if the result is only meaningful for input sorted in ascending order. Searching
    /// unsorted input is not checked and yields an unspecified result.
    const REQUIRES_SORTED: bool = false;

    fn name() -> String;

    fn search<T>(arr: &[T], target: &T) -> Option<usize>
    where
        T: Ord;
}

pub mod patterns;

// Used by the test instantiation macros, so that dependent crates don't need to depend on paste.
#[doc(hidden)]
pub use paste;
