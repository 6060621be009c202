use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Half-width of the multiplicative jitter applied by the heuristic estimator.
pub const DEFAULT_JITTER_SPREAD: f64 = 0.02;

/// Source of the multiplicative noise factor applied to heuristic estimates.
pub trait JitterSource: Send + Sync {
    fn factor(&self) -> f64;
}

/// Always returns `1.0`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn factor(&self) -> f64 {
        1.0
    }
}

/// Uniform factor in `[1 - spread, 1 + spread]`.
///
/// Unseeded instances draw from the thread-local generator; seeded instances
/// share one generator so a run is reproducible.
#[derive(Debug)]
pub struct UniformJitter {
    spread: f64,
    seeded: Option<Mutex<StdRng>>,
}

impl UniformJitter {
    pub fn new(spread: f64) -> Self {
        Self {
            spread: spread.abs(),
            seeded: None,
        }
    }

    pub fn seeded(spread: f64, seed: u64) -> Self {
        Self {
            spread: spread.abs(),
            seeded: Some(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }
}

impl JitterSource for UniformJitter {
    fn factor(&self) -> f64 {
        let range = (1.0 - self.spread)..=(1.0 + self.spread);
        match &self.seeded {
            Some(rng) => rng
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .gen_range(range),
            None => rand::thread_rng().gen_range(range),
        }
    }
}

/// Jitter configuration read at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JitterSettings {
    pub enabled: bool,
    pub seed: Option<u64>,
}

impl JitterSettings {
    pub fn build(&self) -> Arc<dyn JitterSource> {
        match (self.enabled, self.seed) {
            (false, _) => Arc::new(NoJitter),
            (true, Some(seed)) => Arc::new(UniformJitter::seeded(DEFAULT_JITTER_SPREAD, seed)),
            (true, None) => Arc::new(UniformJitter::new(DEFAULT_JITTER_SPREAD)),
        }
    }
}
