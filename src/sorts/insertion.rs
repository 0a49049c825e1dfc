use std::cmp::Ordering;

sort_impl!("insertion_sort", STABLE = true);

/// Sorts the slice with insertion sort.
///
/// This sort is stable and *O*(*n*^2) worst-case, *O*(*n*) if the slice is already sorted.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        insert_tail(&mut v[..=i], is_less);
    }
}

/// Inserts `v[v.len() - 1]` into the sorted prefix `v[..v.len() - 1]`.
///
/// Walks left past every element the tail is less than, then shifts that run one slot to the
/// right and drops the tail into the hole.
fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let tail = v.len() - 1;

    let mut hole = tail;
    while hole > 0 && is_less(&v[tail], &v[hole - 1]) {
        hole -= 1;
    }

    v[hole..].rotate_right(1);
}
