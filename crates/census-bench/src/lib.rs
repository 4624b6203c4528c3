//! Benchmark profiles and utilities for census populations.
//!
//! - [`churn_script`]: deterministic add/remove decisions via seed
//! - [`warm_population`]: a population with a fragmented free list

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use census_pool::Population;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One step of a churn script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChurnStep {
    /// Add a member.
    Add,
    /// Remove the live member at this position (mod live count).
    Remove(u32),
}

/// Generate `len` churn steps, `add_percent`% of them adds.
///
/// The same seed always yields the same script.
pub fn churn_script(seed: u64, len: usize, add_percent: u32) -> Vec<ChurnStep> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            if rng.next_u32() % 100 < add_percent {
                ChurnStep::Add
            } else {
                ChurnStep::Remove(rng.next_u32())
            }
        })
        .collect()
}

/// Build a population with `slots` slots, every other one freed.
///
/// Freed slots are queued in ascending index order, so subsequent adds
/// exercise the reuse path before any append.
pub fn warm_population<T>(slots: u32) -> Population<T> {
    let mut pop = Population::new();
    let members: Vec<_> = (0..slots).map(|_| pop.add()).collect();
    for m in members.into_iter().step_by(2) {
        pop.remove(m);
    }
    pop
}
