//! # Dice Feature
//!
//! Uniform percentile roll for "на дабл" questions.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

use rand::Rng;

/// Highest value a roll can produce (inclusive).
pub const ROLL_MAX: u32 = 100;

/// Roll a number in `0..=ROLL_MAX` with the thread-local generator.
pub fn roll_percent() -> u32 {
    roll_percent_with(&mut rand::rng())
}

pub fn roll_percent_with<R: Rng>(rng: &mut R) -> u32 {
    rng.random_range(0..=ROLL_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_roll_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(roll_percent_with(&mut rng) <= ROLL_MAX);
        }
    }

    #[test]
    fn test_roll_is_deterministic_for_seed() {
        let a = roll_percent_with(&mut StdRng::seed_from_u64(42));
        let b = roll_percent_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_roll_reaches_both_ends() {
        let mut rng = StdRng::seed_from_u64(1);
        let rolls: Vec<u32> = (0..20_000).map(|_| roll_percent_with(&mut rng)).collect();
        assert!(rolls.contains(&0));
        assert!(rolls.contains(&ROLL_MAX));
    }
}
