use std::fmt::Debug;

use crate::clock::{measure, CycleSource};
use crate::config::BenchConfig;
use crate::error::{BenchError, Result};
use crate::report::Report;

/// Repeats one closure under a clock and keeps every tick count.
///
/// Runs are strictly sequential on the calling thread.
pub struct Sampler<C: CycleSource> {
    clock: C,
    warmup: usize,
    iterations: usize,
}

impl<C: CycleSource> Sampler<C> {
    pub fn new(clock: C, warmup: usize, iterations: usize) -> Self {
        Self {
            clock,
            warmup,
            iterations: iterations.max(1),
        }
    }

    pub fn from_config(clock: C, config: &BenchConfig) -> Self {
        Self::new(clock, config.warmup, config.iterations)
    }

    pub fn clock_label(&self) -> &'static str {
        self.clock.label()
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Times `f` once per iteration. Every timed run must return the same
    /// outcome, otherwise the strategy is reported as a [`BenchError::Mismatch`].
    pub fn sample<R, F>(&mut self, name: &str, mut f: F) -> Result<Report<R>>
    where
        R: PartialEq + Debug,
        F: FnMut() -> R,
    {
        for _ in 0..self.warmup {
            std::hint::black_box(f());
        }

        let (outcome, first) = measure(&mut self.clock, &mut f);
        let mut cycles = Vec::with_capacity(self.iterations);
        cycles.push(first);

        for _ in 1..self.iterations {
            let (again, ticks) = measure(&mut self.clock, &mut f);
            if again != outcome {
                return Err(BenchError::Mismatch {
                    strategy: name.to_string(),
                    expected: format!("{outcome:?}"),
                    actual: format!("{again:?}"),
                });
            }
            cycles.push(ticks);
        }

        tracing::debug!(strategy = name, ?outcome, runs = cycles.len(), "sampled");
        Ok(Report {
            name: name.to_string(),
            outcome,
            cycles,
        })
    }
}
