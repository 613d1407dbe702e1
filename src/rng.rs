use std::hash::Hasher;

use fnv::FnvHasher;
use rand::{Rng, SeedableRng, distr::uniform::SampleUniform, seq::SliceRandom};
use rand_chacha::ChaCha12Rng;

use crate::error::{MazeError, Result};

/// Random source owned by a single generator.
///
/// A non-empty seed string is hashed into the engine state, so the same
/// string always replays the same sequence of draws. The engine is ChaCha12
/// from `rand_chacha`, whose output is fixed across releases.
///
/// An empty seed pulls fresh entropy from the OS (not a wall-clock seed) and
/// is not reproducible.
pub struct MazeRng {
    rng: ChaCha12Rng,
}

impl MazeRng {
    pub fn new(seed: &str) -> Self {
        let rng = if seed.is_empty() {
            ChaCha12Rng::from_os_rng()
        } else {
            ChaCha12Rng::seed_from_u64(hash_seed(seed))
        };
        MazeRng { rng }
    }

    /// Uniform integer in `[min, max]`, both ends inclusive.
    pub fn next_int<T>(&mut self, min: T, max: T) -> Result<T>
    where
        T: SampleUniform + PartialOrd + Copy + Into<i64>,
    {
        if min > max {
            return Err(MazeError::InvalidRange {
                min: min.into(),
                max: max.into(),
            });
        }
        Ok(self.rng.random_range(min..=max))
    }

    /// Permutes `items` in place (Fisher-Yates), advancing the engine.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

/// Folds the seed string's bytes into 64 bits of engine seed.
fn hash_seed(seed: &str) -> u64 {
    let mut hasher = FnvHasher::default();
    hasher.write(seed.as_bytes());
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(rng: &mut MazeRng) -> Vec<u16> {
        (0..32).map(|_| rng.next_int(0u16, 1000).unwrap()).collect()
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = MazeRng::new("abc");
        let mut b = MazeRng::new("abc");
        assert_eq!(draws(&mut a), draws(&mut b));

        let mut xs = [1, 2, 3, 4, 5, 6, 7, 8];
        let mut ys = xs;
        a.shuffle(&mut xs);
        b.shuffle(&mut ys);
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_seeded_draws_are_pinned() {
        let mut rng = MazeRng::new("abc");
        let first = (0..8)
            .map(|_| rng.next_int(0u16, 1000).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(first, [884, 624, 558, 866, 214, 939, 907, 842]);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = MazeRng::new("abc");
        let mut b = MazeRng::new("abd");
        assert_ne!(draws(&mut a), draws(&mut b));
    }

    #[test]
    fn test_next_int_is_inclusive() {
        let mut rng = MazeRng::new("bounds");
        let mut seen = [false; 4];
        for _ in 0..1000 {
            let v = rng.next_int(3u16, 6).unwrap();
            assert!((3..=6).contains(&v));
            seen[(v - 3) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));

        assert_eq!(rng.next_int(9u16, 9).unwrap(), 9);
    }

    #[test]
    fn test_invalid_range() {
        let mut rng = MazeRng::new("bounds");
        assert_eq!(
            rng.next_int(5i32, 2),
            Err(MazeError::InvalidRange { min: 5, max: 2 })
        );
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = MazeRng::new("perm");
        let mut items: Vec<u8> = (0..20).collect();
        rng.shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, (0..20).collect::<Vec<u8>>());
    }
}
