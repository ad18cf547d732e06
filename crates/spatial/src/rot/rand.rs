//! Random rotations (uniform unit quaternions + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for rotations used by
//!   round-trip tests and benches. Draws are reproducible and indexable
//!   through a `(seed, index)` replay token.
//!
//! Model
//! - Shoemake's subgroup algorithm: three uniforms map to a quaternion
//!   uniform on SO(3). The result is unit norm by construction.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Quaternion;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a uniformly distributed unit quaternion (Shoemake).
pub fn draw_unit_quaternion(tok: ReplayToken) -> Quaternion {
    let mut rng = tok.to_std_rng();
    draw_unit_quaternion_with(&mut rng)
}

/// Same distribution, drawing from a caller-owned RNG stream.
pub fn draw_unit_quaternion_with<R: Rng>(rng: &mut R) -> Quaternion {
    let u1: f64 = rng.gen();
    let u2: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
    let u3: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
    let a = (1.0 - u1).sqrt();
    let b = u1.sqrt();
    Quaternion::new(b * u3.cos(), a * u2.sin(), a * u2.cos(), b * u3.sin())
}
