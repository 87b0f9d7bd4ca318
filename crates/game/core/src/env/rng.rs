//! RNG oracle for deterministic random rolls.
//!
//! Randomness in the simulation (throw direction, enemy hit-react delays)
//! goes through a stateless oracle keyed by an explicit seed, so a replay of
//! the same action sequence reproduces the same rolls.

/// Deterministic random number source.
///
/// Implementations must produce the same value for the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform float in `[0, 1)`.
    fn unit_f32(&self, seed: u64) -> f32 {
        // 24 mantissa bits keeps the division exact.
        (self.next_u32(seed) >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform float in `[min, max]`.
    fn range_f32(&self, seed: u64, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        min + self.unit_f32(seed) * (max - min)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state. Small, fast, and passes the
/// usual statistical batteries, which is more than the throw cone needs.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// LCG step: `state' = (state * multiplier + increment) mod 2^64`.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Computes a per-roll seed from replay-stable components.
///
/// `game_seed` is fixed at session start, `nonce` increments per executed
/// action, `entity_id` names the item or enemy involved, and `context`
/// distinguishes multiple rolls inside one action.
pub fn compute_seed(game_seed: u64, nonce: u64, entity_id: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash-style mixing constants.
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (entity_id as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_value() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
        assert_ne!(rng.next_u32(42), rng.next_u32(43));
    }

    #[test]
    fn unit_stays_in_range() {
        let rng = PcgRng;
        for seed in 0..1000u64 {
            let value = rng.unit_f32(seed);
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn range_respects_bounds() {
        let rng = PcgRng;
        for seed in 0..1000u64 {
            let value = rng.range_f32(seed, 0.4, 1.5);
            assert!((0.4..=1.5).contains(&value));
        }
        assert_eq!(rng.range_f32(7, 2.0, 2.0), 2.0);
    }

    #[test]
    fn seeds_differ_per_component() {
        let base = compute_seed(1, 2, 3, 0);
        assert_ne!(base, compute_seed(1, 2, 3, 1));
        assert_ne!(base, compute_seed(1, 3, 3, 0));
        assert_ne!(base, compute_seed(2, 2, 3, 0));
    }
}
