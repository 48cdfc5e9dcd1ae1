use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

/// Seeded rng plus the seed actually used
///
/// Without a seed one is drawn from OS entropy; returning it lets a run be
/// replayed.
pub fn seeded_rng(seed: Option<u64>) -> (StdRng, u64) {
    let seed = seed.unwrap_or_else(|| OsRng.next_u64());
    (StdRng::seed_from_u64(seed), seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_explicit_seed_is_returned() {
        let (_, seed) = seeded_rng(Some(42));
        assert_eq!(seed, 42);
    }

    #[test]
    fn test_same_seed_same_stream() {
        let (mut a, _) = seeded_rng(Some(7));
        let (mut b, _) = seeded_rng(Some(7));
        for _ in 0..10 {
            assert_eq!(a.r#gen::<u64>(), b.r#gen::<u64>());
        }
    }

    #[test]
    fn test_entropy_seed_replays() {
        let (mut a, seed) = seeded_rng(None);
        let (mut b, _) = seeded_rng(Some(seed));
        assert_eq!(a.r#gen::<f64>(), b.r#gen::<f64>());
    }
}
