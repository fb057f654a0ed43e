use std::hint::black_box;

use cyclebench_core::{BenchError, CycleSource, Report, Result, Sampler};
use cyclebench_dsa::Envelope;

use crate::strategies::{Tally, ValidationStrategy};

/// Times a list of validation strategies over one input set.
pub struct ValidationSuite<'a> {
    inputs: &'a [Envelope],
    strategies: Vec<ValidationStrategy>,
}

impl<'a> ValidationSuite<'a> {
    pub fn new(inputs: &'a [Envelope], strategies: Vec<ValidationStrategy>) -> Self {
        Self { inputs, strategies }
    }

    pub fn with_defaults(inputs: &'a [Envelope]) -> Self {
        Self::new(inputs, ValidationStrategy::defaults())
    }

    /// Runs each strategy in order and checks that every checking strategy
    /// reached the same tally. The baseline is reported but never compared.
    pub fn run<C: CycleSource>(&self, sampler: &mut Sampler<C>) -> Result<Vec<Report<Tally>>> {
        let mut reports = Vec::with_capacity(self.strategies.len());
        let mut reference: Option<(ValidationStrategy, Tally)> = None;

        for &strategy in &self.strategies {
            let kernel = strategy.kernel();
            let inputs = self.inputs;
            let report = sampler.sample(strategy.name(), || kernel(black_box(inputs)))?;

            if !strategy.is_baseline() {
                match reference {
                    None => reference = Some((strategy, report.outcome)),
                    Some((first, expected)) if expected != report.outcome => {
                        tracing::debug!(reference = first.name(), "validation strategies diverged");
                        return Err(BenchError::Mismatch {
                            strategy: strategy.name().to_string(),
                            expected: format!("{expected:?} (from {})", first.name()),
                            actual: format!("{:?}", report.outcome),
                        });
                    }
                    Some(_) => {}
                }
            }
            reports.push(report);
        }
        Ok(reports)
    }
}

/// Logs which predicates each rejected record breaks. Untimed.
pub fn explain_rejections(inputs: &[Envelope]) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }
    for (index, env) in inputs.iter().enumerate() {
        let faults = env.faults();
        if !faults.is_empty() {
            tracing::debug!(index, ?env, faults = %faults, "rejected envelope");
        }
    }
}
