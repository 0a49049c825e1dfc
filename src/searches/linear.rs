search_impl!("linear_search");

/// Scans `v` from the front and returns the index of the first element equal to `target`.
///
/// *O*(*n*), works on unsorted input.
pub fn search<T>(v: &[T], target: &T) -> Option<usize>
where
    T: PartialEq,
{
    for (i, elem) in v.iter().enumerate() {
        if elem == target {
            return Some(i);
        }
    }

    None
}
