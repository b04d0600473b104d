//! Random rolls deciding whether a simulated request fails.

use crate::config::{ROLL_MAX, ROLL_MIN};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

/// Where request rolls come from.
#[derive(Debug)]
pub(crate) enum RollSource {
    /// Fresh thread-local randomness on every roll
    Thread,
    /// Reproducible sequence from a fixed seed
    Seeded(Mutex<StdRng>),
}

impl RollSource {
    pub(crate) fn seeded(seed: u64) -> Self {
        RollSource::Seeded(Mutex::new(StdRng::seed_from_u64(seed)))
    }

    /// Uniform roll in `ROLL_MIN..=ROLL_MAX`.
    pub(crate) fn roll(&self) -> u8 {
        match self {
            RollSource::Thread => rand::thread_rng().gen_range(ROLL_MIN..=ROLL_MAX),
            RollSource::Seeded(rng) => rng
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .gen_range(ROLL_MIN..=ROLL_MAX),
        }
    }
}
