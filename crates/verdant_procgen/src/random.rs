use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// True when a roll in `0..100` lands below `percentage`.
///
/// `percentage >= 100` always succeeds, `0` never does.
pub fn roll_percentage<R: Rng + ?Sized>(rng: &mut R, percentage: u32) -> bool {
    rng.gen_range(0..100) < percentage
}

/// Deterministic stream for callers that only have a numeric seed
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_extremes() {
        let mut rng = seeded_rng(7);
        for _ in 0..200 {
            assert!(roll_percentage(&mut rng, 100));
            assert!(!roll_percentage(&mut rng, 0));
        }
    }

    #[test]
    fn test_roll_is_roughly_fair() {
        let mut rng = seeded_rng(1587);
        let hits = (0..10_000).filter(|_| roll_percentage(&mut rng, 50)).count();
        assert!((4_500..5_500).contains(&hits), "got {hits} hits");
    }

    #[test]
    fn test_seeded_rng_repeats() {
        let a: Vec<u32> = seeded_rng(42).sample_iter(rand::distributions::Standard).take(8).collect();
        let b: Vec<u32> = seeded_rng(42).sample_iter(rand::distributions::Standard).take(8).collect();
        assert_eq!(a, b);
    }
}
