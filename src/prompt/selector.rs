// src/prompt/selector.rs
//! Random source behind tone/trend/example/fallback selection.
//!
//! Variety is intentional, so production uses the thread RNG. Tests inject a
//! [`SeededSelector`] or their own [`Selector`] to pin the choices.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait Selector: Send + Sync {
    /// Index in `0..len`. Returns 0 when `len` is 0.
    fn pick(&self, len: usize) -> usize;

    /// Up to `amount` distinct indices in `0..len`
    fn sample(&self, len: usize, amount: usize) -> Vec<usize>;
}

/// Thread-local RNG, fresh entropy per call
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSelector;

impl Selector for ThreadRngSelector {
    fn pick(&self, len: usize) -> usize {
        pick_with(&mut rand::rng(), len)
    }

    fn sample(&self, len: usize, amount: usize) -> Vec<usize> {
        sample_with(&mut rand::rng(), len, amount)
    }
}

/// Deterministic selector for reproducible runs
pub struct SeededSelector {
    rng: Mutex<StdRng>,
}

impl SeededSelector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Selector for SeededSelector {
    fn pick(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        pick_with(&mut *rng, len)
    }

    fn sample(&self, len: usize, amount: usize) -> Vec<usize> {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        sample_with(&mut *rng, len, amount)
    }
}

fn pick_with<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    rng.random_range(0..len)
}

fn sample_with<R: Rng + ?Sized>(rng: &mut R, len: usize, amount: usize) -> Vec<usize> {
    rand::seq::index::sample(rng, len, amount.min(len)).into_vec()
}
