use std::cmp::Ordering;

sort_impl!("merge_sort", STABLE = true);

/// Sorts the slice with a top-down merge sort.
///
/// This sort is stable and *O*(*n* \* log(*n*)) for every input.
///
/// # Current implementation
///
/// The slice is split at `len / 2`, both halves are copied out, sorted recursively and merged
/// back into the slice. Each level of the recursion allocates as much auxiliary memory as the
/// slice it sorts.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    merge_sort(v, &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if v.len() <= 1 {
        return;
    }

    let mid = v.len() / 2;
    let mut left = v[..mid].to_vec();
    let mut right = v[mid..].to_vec();

    merge_sort(&mut left, is_less);
    merge_sort(&mut right, is_less);

    merge(v, &left, &right, is_less);
}

/// Merges the sorted runs `left` and `right` into `dest`.
///
/// `dest.len()` must equal `left.len() + right.len()`. On ties the element from `left` is taken
/// first, which is what makes the sort stable.
fn merge<T, F>(dest: &mut [T], left: &[T], right: &[T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    debug_assert_eq!(dest.len(), left.len() + right.len());

    let (mut l, mut r) = (0, 0);

    for slot in dest.iter_mut() {
        let take_right = r < right.len() && (l == left.len() || is_less(&right[r], &left[l]));

        if take_right {
            *slot = right[r].clone();
            r += 1;
        } else {
            *slot = left[l].clone();
            l += 1;
        }
    }
}
