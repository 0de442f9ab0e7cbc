use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Injectable randomness for building loadouts and resolving turns.
///
/// Every draw names its reason so scripted test runs can be traced. A live
/// generator wraps `StdRng`; a scripted one replays fixed unit values, which
/// makes crit rolls, variance and move picks fully predictable in tests.
#[derive(Debug, Clone)]
pub struct BattleRng {
    source: RngSource,
}

#[derive(Debug, Clone)]
enum RngSource {
    Live(StdRng),
    Scripted { outcomes: Vec<f64>, index: usize },
}

impl BattleRng {
    /// Generator seeded from the operating system.
    pub fn new_random() -> Self {
        Self {
            source: RngSource::Live(StdRng::from_os_rng()),
        }
    }

    /// Deterministic generator for reproducible sessions.
    pub fn new_seeded(seed: u64) -> Self {
        Self {
            source: RngSource::Live(StdRng::seed_from_u64(seed)),
        }
    }

    /// Replays `outcomes` in order. Each value must lie in `[0, 1)`.
    ///
    /// Panics when the script runs out, naming the draw that needed a value.
    pub fn new_for_test(outcomes: Vec<f64>) -> Self {
        Self {
            source: RngSource::Scripted { outcomes, index: 0 },
        }
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_unit(&mut self, reason: &str) -> f64 {
        let value = match &mut self.source {
            RngSource::Live(rng) => rng.random::<f64>(),
            RngSource::Scripted { outcomes, index } => {
                if *index >= outcomes.len() {
                    panic!(
                        "BattleRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                        reason
                    );
                }
                let outcome = outcomes[*index];
                *index += 1;
                outcome
            }
        };
        tracing::trace!(value, reason, "rng draw");
        value
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn pick_index(&mut self, len: usize, reason: &str) -> usize {
        debug_assert!(len > 0, "pick_index called with an empty range");
        if let RngSource::Live(rng) = &mut self.source {
            let index = rng.random_range(0..len);
            tracing::trace!(index, len, reason, "rng pick");
            return index;
        }
        let unit = self.next_unit(reason);
        ((unit * len as f64) as usize).min(len - 1)
    }

    /// Fisher-Yates shuffle driven by `pick_index`.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.pick_index(i + 1, "shuffle");
            items.swap(i, j);
        }
    }

    /// Independent generator for a concurrent task.
    ///
    /// A live generator seeds the child from its own stream; a scripted one
    /// hands the child a copy of the values it has not yet replayed.
    pub fn fork(&mut self) -> Self {
        match &mut self.source {
            RngSource::Live(rng) => Self::new_seeded(rng.random::<u64>()),
            RngSource::Scripted { outcomes, index } => {
                Self::new_for_test(outcomes[(*index).min(outcomes.len())..].to_vec())
            }
        }
    }
}
