use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

/// Tag of one validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Issues generations. Only the most recently issued one is current, so a
/// pass that was overtaken by a newer one can tell its results are stale.
#[derive(Debug, Default)]
pub struct Generations {
    issued: AtomicU64,
}

impl Generations {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn begin(&self) -> Generation {
        Generation(self.issued.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn current(&self) -> Generation {
        Generation(self.issued.load(Ordering::Acquire))
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.current() == generation
    }
}

/// Holds the results of the latest pass and refuses anything older.
#[derive(Debug)]
pub struct Latest<T> {
    applied: Option<(Generation, T)>,
}

impl<T> Default for Latest<T> {
    fn default() -> Self {
        Self { applied: None }
    }
}

impl<T> Latest<T> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Stores `value` if `generation` is still current. Stale values are dropped.
    pub fn apply(&mut self, generations: &Generations, generation: Generation, value: T) -> bool {
        if !generations.is_current(generation) {
            debug!(
                "Dropping results of generation {}, current is {}",
                generation.0,
                generations.current().0
            );
            return false;
        }
        self.applied = Some((generation, value));
        true
    }

    pub fn get(&self) -> Option<&T> {
        self.applied.as_ref().map(|(_, value)| value)
    }

    pub fn generation(&self) -> Option<Generation> {
        self.applied.as_ref().map(|(generation, _)| *generation)
    }
}
