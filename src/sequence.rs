//! Primitive mutators over an integer sequence.
//!
//! A sequence is a fixed-length `[i32]`. None of these operations resize it.

use rand::distributions::{Distribution, Uniform};
use rand::{thread_rng, Rng};

use crate::error::SequenceError;

/// Exchanges the elements at `i` and `j`.
///
/// Fails on an empty sequence, or if either index is outside `0..seq.len()`.
pub fn swap(seq: &mut [i32], i: usize, j: usize) -> Result<(), SequenceError> {
    if seq.is_empty() {
        return Err(SequenceError::Empty);
    }

    let len = seq.len();
    if let Some(&index) = [i, j].iter().find(|&&index| index >= len) {
        return Err(SequenceError::IndexOutOfRange { index, len });
    }

    seq.swap(i, j);
    Ok(())
}

/// Fills every slot with a value drawn uniformly from `0..=10 * seq.len()`.
pub fn randomize(seq: &mut [i32]) -> Result<(), SequenceError> {
    randomize_with(&mut thread_rng(), seq)
}

/// Like [`randomize`], drawing from `rng`.
pub fn randomize_with<R>(rng: &mut R, seq: &mut [i32]) -> Result<(), SequenceError>
where
    R: Rng + ?Sized,
{
    if seq.is_empty() {
        return Err(SequenceError::Empty);
    }

    let max = value_bound(seq.len())?;

    let dist = Uniform::new_inclusive(0, max);
    for slot in seq.iter_mut() {
        *slot = dist.sample(rng);
    }

    Ok(())
}

/// Upper bound `10 * len` of the values [`randomize`] draws for a sequence of `len` elements.
///
/// Fails with [`SequenceError::TooLarge`] when the bound does not fit an `i32`.
pub fn value_bound(len: usize) -> Result<i32, SequenceError> {
    len.checked_mul(10)
        .and_then(|max| i32::try_from(max).ok())
        .ok_or(SequenceError::TooLarge(len))
}

/// Allocates a sequence of `size` elements and randomizes it.
pub fn generate(size: usize) -> Result<Vec<i32>, SequenceError> {
    generate_with(&mut thread_rng(), size)
}

/// Like [`generate`], drawing from `rng`.
pub fn generate_with<R>(rng: &mut R, size: usize) -> Result<Vec<i32>, SequenceError>
where
    R: Rng + ?Sized,
{
    if size == 0 {
        return Err(SequenceError::InvalidSize(size));
    }
    // Checked before allocating.
    value_bound(size)?;

    let mut seq = vec![0; size];
    randomize_with(rng, &mut seq)?;
    Ok(seq)
}
