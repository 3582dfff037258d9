//! Randomized tie-break component of the score.
//!
//! Jitter is the only nondeterministic input to scoring, so it is injected
//! explicitly instead of pulled from a thread-local RNG. In seeded mode the
//! value for a candidate depends only on the seed and the candidate title,
//! which keeps scoring reproducible and independent of iteration order:
//! candidates can be scored in parallel without changing the result.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Upper bound of the jitter contribution; values are uniform in [0, 5).
pub const JITTER_MAX: f64 = 5.0;

/// Source of the per-candidate jitter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jitter {
    /// Uniform [0, 5) derived from this seed and the candidate title.
    Seeded(u64),
    /// No jitter. Scores become fully deterministic; candidates whose
    /// other components are all zero then fall below the exclusion
    /// threshold and drop out of the ranked list.
    Disabled,
}

impl Jitter {
    /// Entropy-seeded jitter, the default for interactive use.
    pub fn entropy() -> Self {
        Jitter::Seeded(rand::random())
    }

    /// The jitter value for one candidate.
    pub fn sample(&self, title: &str) -> f64 {
        match self {
            Jitter::Disabled => 0.0,
            Jitter::Seeded(seed) => {
                let mut rng = StdRng::seed_from_u64(seed ^ fnv1a(title.as_bytes()));
                rng.random_range(0.0..JITTER_MAX)
            }
        }
    }
}

/// FNV-1a, used to fold the candidate title into the seed. Stable across
/// runs and platforms, unlike the std hasher.
fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for &byte in bytes {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}
