//! Sorting strategies.
//!
//! All of them sort ascending in place, except [`library`], which sorts a clone and leaves the
//! input untouched.

// Quadratic, stable, O(n) on sorted input.
pub mod insertion;

// Quadratic in all cases, not stable.
pub mod selection;

// Quadratic in all cases, stable.
pub mod bubble;

// Top-down merge sort, stable, O(n) extra memory per level.
pub mod merge;

// Lomuto partition around the last element, quadratic on sorted input.
pub mod quick;

// Baseline backed by the standard library sort, operates on a copy.
pub mod library;
