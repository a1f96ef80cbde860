//! Random workload generation.
//!
//! Produces reproducible process sets for experiments and invariant tests.
//! IDs are `1..=count` in generation order; arrivals are not sorted.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Shape of a generated workload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadSpec {
    /// Number of processes.
    pub count: usize,
    /// Latest possible arrival time (inclusive).
    pub max_arrival: i64,
    /// Shortest possible burst (inclusive, at least 1).
    pub min_burst: i64,
    /// Longest possible burst (inclusive).
    pub max_burst: i64,
}

impl WorkloadSpec {
    /// Creates a spec with arrivals in `0..=10` and bursts in `1..=10`.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
        }
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the burst range. Bounds are clamped to at least 1 and ordered.
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        let min_burst = min_burst.max(1);
        self.min_burst = min_burst;
        self.max_burst = max_burst.max(min_burst);
        self
    }

    /// Generates processes from the given random source.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        (1..=self.count)
            .map(|id| {
                let arrival = rng.random_range(0..=self.max_arrival);
                let burst = rng.random_range(self.min_burst..=self.max_burst);
                Process::new(id as u32, arrival, burst)
            })
            .collect()
    }

    /// Generates processes from a seeded RNG.
    pub fn generate_seeded(&self, seed: u64) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(&mut rng)
    }
}
