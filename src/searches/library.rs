search_impl!("library_search");

/// Finds the first element equal to `target` with [`Iterator::find`] and maps it back to its
/// index.
pub fn search<T>(v: &[T], target: &T) -> Option<usize>
where
    T: PartialEq,
{
    let found = v.iter().find(|elem| *elem == target)?;

    v.iter().position(|elem| elem == found)
}
