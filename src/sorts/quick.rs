use std::cmp::Ordering;

sort_impl!("quick_sort");

/// Sorts the slice with quicksort.
///
/// This sort is not stable. *O*(*n* \* log(*n*)) on average and *O*(*n*^2) worst-case.
///
/// # Current implementation
///
/// Lomuto partition scheme with the last element as pivot and no pivot sampling. Ascending,
/// descending and all-equal inputs all hit the quadratic worst-case. The recursion always
/// descends into the shorter side and loops on the longer one, which bounds the stack depth to
/// *O*(log(*n*)) without changing which comparisons are made.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while v.len() > 1 {
        let pivot_pos = partition(v, is_less);

        // Split the slice into `left`, `pivot`, and `right`.
        let (left, right) = v.split_at_mut(pivot_pos);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Moves every element less than the last element `v[len - 1]` to the front, then puts the
/// pivot right after them.
///
/// Returns the final position of the pivot. `v` must not be empty.
fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let pivot = v.len() - 1;

    let mut boundary = 0;
    for j in 0..pivot {
        if is_less(&v[j], &v[pivot]) {
            v.swap(boundary, j);
            boundary += 1;
        }
    }

    v.swap(boundary, pivot);
    boundary
}
