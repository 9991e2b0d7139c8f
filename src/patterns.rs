//! Input generators for the shared test battery.
//!
//! All randomness derives from one seed per process, see [`random_init_seed`].

use std::env;

use once_cell::sync::OnceCell;
use rand::prelude::*;
use zipf::ZipfDistribution;

static SEED: OnceCell<u64> = OnceCell::new();

/// Seed shared by every generator in this process.
///
/// Picked at random on first use unless `OVERRIDE_SEED` holds a `u64`, which makes a failing run
/// reproducible.
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

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_seeded_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Values uniformly drawn from `range`, `random_uniform(len, 0..4)` produces lots of duplicates.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    let mut rng = new_seeded_rng();
    let dist: rand::distributions::Uniform<i32> = range.into();
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Zipf distributed values in `1..=len`, a few values repeat very often.
///
/// # Panics
///
/// Panics if `exponent` is not strictly positive.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_seeded_rng();
    let dist = match ZipfDistribution::new(len, exponent) {
        Ok(dist) => dist,
        Err(()) => panic!("invalid zipf exponent: {exponent}"),
    };

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

/// Random ASCII letters, upper and lower case mixed.
pub fn random_letters(len: usize) -> Vec<char> {
    const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

    let mut rng = new_seeded_rng();
    (0..len)
        .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
        .collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..len).map(|_| 66).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

/// Ascending runs of roughly `len / saw_count` elements each.
pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    if len == 0 {
        return Vec::new();
    }

    let saw_len = len.div_ceil(saw_count.max(1));
    (0..len).map(|i| (i % saw_len) as i32).collect()
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let half = len / 2;
    (0..half as i32).chain((0..(len - half) as i32).rev()).collect()
}
