use std::hint::black_box;

use cyclebench_core::{BenchError, CycleSource, Report, Result, Sampler};
use cyclebench_dsa::{djb2, PrecomputedHashes};

use crate::strategies::{self, LookupHit, LookupStrategy};

/// Times a list of lookup strategies searching one haystack for one needle.
pub struct LookupSuite<'a> {
    haystack: &'a [&'a str],
    needle: &'a str,
    strategies: Vec<LookupStrategy>,
}

impl<'a> LookupSuite<'a> {
    pub fn new(haystack: &'a [&'a str], needle: &'a str, strategies: Vec<LookupStrategy>) -> Self {
        Self {
            haystack,
            needle,
            strategies,
        }
    }

    pub fn with_defaults(haystack: &'a [&'a str], needle: &'a str) -> Self {
        Self::new(haystack, needle, LookupStrategy::ALL.to_vec())
    }

    /// Runs each strategy in order and checks they all land on the same index.
    ///
    /// The hash table and the needle's hash for `hash at` are built before any
    /// timing starts; `hash rt` hashes the needle inside its timed region.
    pub fn run<C: CycleSource>(&self, sampler: &mut Sampler<C>) -> Result<Vec<Report<LookupHit>>> {
        let table = PrecomputedHashes::build(self.haystack);
        let search_hash = djb2(self.needle.as_bytes());
        let (haystack, needle) = (self.haystack, self.needle);

        let mut reports = Vec::with_capacity(self.strategies.len());
        let mut reference: Option<(LookupStrategy, Option<usize>)> = None;

        for &strategy in &self.strategies {
            let name = strategy.name();
            let timed = match strategy {
                LookupStrategy::Strcmp => sampler.sample(name, || {
                    strategies::strcmp(black_box(haystack), black_box(needle))
                })?,
                LookupStrategy::StrcmpPrefix => sampler.sample(name, || {
                    strategies::strcmp_prefix(black_box(haystack), black_box(needle))
                })?,
                LookupStrategy::HashRuntime => sampler.sample(name, || {
                    strategies::hash_runtime(black_box(haystack), black_box(needle))
                })?,
                LookupStrategy::HashAheadOfTime => sampler.sample(name, || {
                    strategies::hash_ahead_of_time(black_box(&table), black_box(search_hash))
                })?,
            };

            match reference {
                None => reference = Some((strategy, timed.outcome)),
                Some((first, expected)) if expected != timed.outcome => {
                    tracing::debug!(reference = first.name(), "lookup strategies diverged");
                    return Err(BenchError::Mismatch {
                        strategy: name.to_string(),
                        expected: format!("{expected:?} (from {})", first.name()),
                        actual: format!("{:?}", timed.outcome),
                    });
                }
                Some(_) => {}
            }

            reports.push(Report {
                name: timed.name,
                outcome: LookupHit::resolve(haystack, timed.outcome),
                cycles: timed.cycles,
            });
        }
        Ok(reports)
    }
}
