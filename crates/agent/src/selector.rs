//! Response selection

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Uniform random choice among an intent's canned replies
///
/// Seed it to make the choice reproducible.
pub struct ResponseSelector {
    rng: Mutex<StdRng>,
}

impl ResponseSelector {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// `None` only when `candidates` is empty
    pub fn select(&self, candidates: &[String]) -> Option<String> {
        candidates.choose(&mut *self.rng.lock()).cloned()
    }
}

impl std::fmt::Debug for ResponseSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseSelector").finish_non_exhaustive()
    }
}
