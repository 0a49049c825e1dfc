use std::cmp::Ordering;

sort_impl!("selection_sort");

/// Sorts the slice with selection sort.
///
/// *O*(*n*^2) comparisons regardless of input. Not stable, the swap that moves the minimum into
/// place can jump an element past its equals.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort(v, &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 0..len.saturating_sub(1) {
        let mut min = i;
        for j in (i + 1)..len {
            if is_less(&v[j], &v[min]) {
                min = j;
            }
        }

        v.swap(i, min);
    }
}
