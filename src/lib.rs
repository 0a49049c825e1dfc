//! Classic in-memory sorting and searching over integer sequences, with a harness that times a
//! single invocation of any of them.
//!
//! Every algorithm lives in its own module exposing `sort`/`sort_by` (or `search`) free
//! functions plus a `SortImpl`/`SearchImpl` type implementing [`Sort`]/[`Search`]. The
//! [`registry`] wraps those types behind object-safe strategies for menu driven selection.

pub use sort_test_tools::{Search, Sort};

/// Implements [`Sort`] as `SortImpl` for the module's `sort` and `sort_by` functions.
///
/// Optional `CONST = value` pairs override the trait's associated constants.
macro_rules! sort_impl {
    ($name:expr $(, $konst:ident = $val:expr)* $(,)?) => {
        pub struct SortImpl;

        impl $crate::Sort for SortImpl {
            $(const $konst: bool = $val;)*

            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

/// Implements [`Search`] as `SearchImpl` for the module's `search` function.
macro_rules! search_impl {
    ($name:expr $(, $konst:ident = $val:expr)* $(,)?) => {
        pub struct SearchImpl;

        impl $crate::Search for SearchImpl {
            $(const $konst: bool = $val;)*

            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn search<T>(arr: &[T], target: &T) -> Option<usize>
            where
                T: Ord,
            {
                search(arr, target)
            }
        }
    };
}

pub mod config;
pub mod employee;
pub mod error;
pub mod menu;
pub mod registry;
pub mod searches;
pub mod sequence;
pub mod sorts;
pub mod timing;

pub use error::{Error, Result};
