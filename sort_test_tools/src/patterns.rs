use std::env;
use std::ops::RangeInclusive;

use once_cell::sync::OnceCell;
use rand::distributions::{Distribution, Uniform};
use rand::prelude::*;
use zipf::ZipfDistribution;

static SEED: OnceCell<u64> = OnceCell::new();

/// Seed shared by every pattern generated in this process.
///
/// Set `OVERRIDE_SEED` to reproduce a failing run, the seed is part of every assertion message.
pub fn random_init_seed() -> u64 {
    *SEED.get_or_init(|| {
        env::var("OVERRIDE_SEED")
            .ok()
            .and_then(|seed| seed.parse().ok())
            .unwrap_or_else(|| thread_rng().gen())
    })
}

fn new_seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

/// Uniformly distributed values over the whole `i32` range.
pub fn random(len: usize) -> Vec<i32> {
    random_uniform(len, i32::MIN..=i32::MAX)
}

/// Uniformly distributed values in `range`. A narrow range yields many duplicates.
pub fn random_uniform(len: usize, range: RangeInclusive<i32>) -> Vec<i32> {
    let dist = Uniform::new_inclusive(*range.start(), *range.end());
    dist.sample_iter(&mut new_seeded_rng()).take(len).collect()
}

/// Zipfian distributed values in `1..=len`, few values are very common.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let dist = ZipfDistribution::new(len, exponent).unwrap();
    let mut rng = new_seeded_rng();

    (0..len)
        .map(|_| i32::try_from(dist.sample(&mut rng)).unwrap())
        .collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len).map(|i| i32::try_from(i).unwrap()).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len).rev().map(|i| i32::try_from(i).unwrap()).collect()
}

/// `saw_count` ascending runs of random values, concatenated.
pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut vals = random(len);
    let chunk_len = len.div_ceil(saw_count.max(1));

    for chunk in vals.chunks_mut(chunk_len) {
        chunk.sort();
    }

    vals
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}
