use std::num::NonZeroU64;

use rand::prelude::{Rng, SeedableRng};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

const STRING_SIZE: usize = 100;

// Small priority domain so buckets actually collide, like real workloads.
const MAX_PRIORITY: u64 = 1_000;

#[allow(dead_code)]
pub(crate) fn gen_random_priorities(n: usize, seed: u64) -> Vec<NonZeroU64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = rand::distributions::Uniform::new_inclusive(1u64, MAX_PRIORITY);
    let mut res = Vec::with_capacity(n);
    for _ in 0..n {
        res.push(NonZeroU64::new(rng.sample(dist)).expect("distribution starts at 1"))
    }
    res
}

#[allow(dead_code)]
pub(crate) fn gen_random_usizes(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = rand::distributions::Uniform::new_inclusive(1usize, 40_000_000usize);
    let mut res = Vec::with_capacity(n);
    for _ in 0..n {
        res.push(rng.sample(dist))
    }
    res
}

#[allow(dead_code)]
pub(crate) fn get_random_strings(n: usize, seed: u64) -> Vec<String> {
    let alphabet: Vec<char> = (0u8..0x7f)
        .into_iter()
        .filter(|x| x.is_ascii_alphanumeric())
        .map(|x| x as char)
        .collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut res = Vec::with_capacity(n);
    for _ in 0..n {
        let s: String = alphabet[..]
            .choose_multiple(&mut rng, STRING_SIZE)
            .collect();
        res.push(s);
    }
    res
}

#[allow(dead_code)]
pub(crate) fn choose_some<T>(vals: &[T], num: usize, seed: u64) -> Vec<T>
where
    T: Clone,
{
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    vals.choose_multiple(&mut rng, num).cloned().collect()
}
