use std::cmp::Ordering;

search_impl!("binary_search", REQUIRES_SORTED = true);

/// Binary search over `v`, which must be sorted in ascending order.
///
/// The precondition is not checked. On unsorted input the result is unspecified: the target may
/// be missed even if present. With duplicates any one of the equal elements may be returned.
///
/// *O*(log(*n*)).
pub fn search<T>(v: &[T], target: &T) -> Option<usize>
where
    T: Ord,
{
    // Half-open interval `low..high` of candidates.
    let mut low = 0;
    let mut high = v.len();

    while low < high {
        let mid = low + (high - low) / 2;

        match v[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    None
}
