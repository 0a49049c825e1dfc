//! Search strategies.
//!
//! Every search returns `Option<usize>`, where `None` means the target is absent. Reports
//! rendered for humans show the absent case as [`NOT_FOUND`].

pub mod binary;
pub mod library;
pub mod linear;

/// Index printed for a target that was not found.
pub const NOT_FOUND: isize = -1;

/// Maps a search result to the index shown in reports, [`NOT_FOUND`] if absent.
#[inline]
#[must_use]
pub fn index_or_not_found(result: Option<usize>) -> isize {
    result.map_or(NOT_FOUND, |index| index as isize)
}
