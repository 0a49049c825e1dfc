//! Reference sort backed by the standard library.
//!
//! Unlike every other strategy this one does NOT sort in place. It clones the input, sorts the
//! clone with a comparator and discards it, so timing it measures the clone plus the sort while
//! the caller's sequence stays as it was. Use [`sorted_copy`] to get at the result.

use std::cmp::Ordering;
use std::hint::black_box;

sort_impl!("library_sort", IN_PLACE = false);

/// Sorts a copy of `v`. `v` is not modified.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    sort_by(v, |a, b| a.cmp(b));
}

/// Sorts a copy of `v` with a comparator. `v` is not modified.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    black_box(sorted_copy_by(v, compare));
}

pub fn sorted_copy<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    sorted_copy_by(v, |a, b| a.cmp(b))
}

pub fn sorted_copy_by<T, F>(v: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut copy = v.to_vec();
    copy.sort_by(compare);
    copy
}
