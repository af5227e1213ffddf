//! Keystroke debounce with a generation counter.
//!
//! Each call to [`Debouncer::arm`] supersedes every earlier generation, so
//! when a scheduled callback finally runs it first checks that its
//! generation is still current. The timer itself is browser-only; the
//! superseding logic is plain Rust and tested natively.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::Cell;
use std::rc::Rc;

/// Delay applied to search inputs before a backend call fires.
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

/// Shared debounce handle. Cloning shares the generation counter.
#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    generation: Rc<Cell<u64>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, invalidating all previously armed callbacks.
    pub fn arm(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }

    /// Whether the given generation is still the latest one armed.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }

    /// Schedule `f` to run after `delay_ms`, unless another call arms the
    /// debouncer first.
    #[cfg(feature = "hydrate")]
    pub fn schedule(&self, delay_ms: u32, f: impl FnOnce() + 'static) {
        let generation = self.arm();
        let handle = self.clone();
        gloo_timers::callback::Timeout::new(delay_ms, move || {
            if handle.is_current(generation) {
                f();
            }
        })
        .forget();
    }
}
