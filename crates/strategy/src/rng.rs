//! Per-bidder randomness
//!
//! Every stochastic bidder owns a [`BidderRng`]. A seeder generator is fixed at
//! construction; each `init` draws a fresh per-auction generator from it, so a
//! seeded bidder replays the same sequence of auctions while consecutive
//! auctions still differ.

use rand::prelude::*;
use rand_distr::{Distribution, Normal};

pub struct BidderRng {
    seeder: StdRng,
    rng: StdRng,
}

impl BidderRng {
    pub fn new(seed: Option<u64>) -> Self {
        let mut seeder = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let rng = StdRng::seed_from_u64(seeder.next_u64());

        Self { seeder, rng }
    }

    /// Start the generator for a new auction
    pub fn reseed(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seeder.next_u64());
    }

    /// Draw from a normal distribution. A non-finite or negative deviation
    /// degenerates to the mean.
    pub fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        match Normal::new(mean, std_dev) {
            Ok(normal) => normal.sample(&mut self.rng),
            Err(_) => mean,
        }
    }
}

impl RngCore for BidderRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = BidderRng::new(Some(7));
        let mut b = BidderRng::new(Some(7));

        for _ in 0..3 {
            a.reseed();
            b.reseed();
            for _ in 0..10 {
                assert_eq!(a.gaussian(10.0, 3.0), b.gaussian(10.0, 3.0));
            }
        }
    }

    #[test]
    fn test_reseed_changes_sequence() {
        let mut rng = BidderRng::new(Some(7));
        let first: Vec<u64> = (0..4).map(|_| rng.next_u64()).collect();
        rng.reseed();
        let second: Vec<u64> = (0..4).map(|_| rng.next_u64()).collect();
        assert_ne!(first, second);
    }

    #[test]
    fn test_degenerate_deviation() {
        let mut rng = BidderRng::new(Some(1));
        assert_eq!(rng.gaussian(5.0, 0.0), 5.0);
        assert_eq!(rng.gaussian(5.0, -1.0), 5.0);
    }
}
