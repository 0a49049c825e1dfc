use std::cmp::Ordering;

sort_impl!("bubble_sort", STABLE = true);

/// Sorts the slice with bubble sort.
///
/// Every pass swaps adjacent out-of-order pairs and leaves the largest remaining element at the
/// end of the unsorted part. There is no early exit, so it is *O*(*n*^2) even for sorted input.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 0..len.saturating_sub(1) {
        for j in 0..(len - i - 1) {
            // Strictly less, equal neighbours are never swapped.
            if is_less(&v[j + 1], &v[j]) {
                v.swap(j, j + 1);
            }
        }
    }
}
