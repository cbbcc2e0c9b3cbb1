use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    /// Process-wide random source, seeded once and shared by all requests.
    rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self::from_rng(settings, StdRng::from_os_rng())
    }

    /// Deterministic state for reproducible responses.
    pub fn with_seed(settings: Settings, seed: u64) -> Self {
        Self::from_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn from_rng(settings: Settings, rng: StdRng) -> Self {
        Self {
            settings: Arc::new(settings),
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Run `f` with exclusive access to the shared random source.
    /// The lock is released before returning, so never hold it across `.await`.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // A panic mid-draw leaves the generator usable
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *rng)
    }
}
