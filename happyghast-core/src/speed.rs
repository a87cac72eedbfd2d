//! Potency-to-speed magnitude tiers.
//!
//! | Amplifier | Tier | Magnitude        |
//! |-----------|------|------------------|
//! | ≤ 0       | I    | 0.40             |
//! | 1         | II   | 0.80             |
//! | ≥ 2       | III+ | 0.40 × (amp + 1) |

use crate::types::Polarity;

/// Magnitude of tier I, and the per-level step beyond tier II.
pub const TIER_STEP: f64 = 0.40;

/// Magnitude of tier II.
pub const TIER_II: f64 = 0.80;

/// Unsigned speed multiplier for a potency amplifier.
#[must_use]
pub fn magnitude(amplifier: i32) -> f64 {
    if amplifier <= 0 {
        TIER_STEP
    } else if amplifier == 1 {
        TIER_II
    } else {
        TIER_STEP * (f64::from(amplifier) + 1.0)
    }
}

/// Signed multiplier: positive for boost, negative for slow.
#[must_use]
pub fn signed_magnitude(amplifier: i32, polarity: Polarity) -> f64 {
    polarity.sign() * magnitude(amplifier)
}
