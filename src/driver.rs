use std::io::IsTerminal;

use cyclebench_core::{
    pin_current_thread, BenchConfig, Clock, CycleSource, Document, Result, Sampler, Section,
};
use cyclebench_dsa::{HAYSTACK, NEEDLE};
use cyclebench_lookup::{LookupHit, LookupStrategy, LookupSuite};
use cyclebench_validate::{explain_rejections, Tally, ValidationStrategy, ValidationSuite};
use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber on stderr. `RUST_LOG` overrides the `warn` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}

fn prepare(config: &BenchConfig) -> Result<Sampler<Clock>> {
    if let Some(core) = config.pin_core {
        pin_current_thread(core)?;
    }
    let clock = Clock::open_or_fallback(config.clock);
    tracing::info!(
        clock = clock.label(),
        iterations = config.iterations,
        warmup = config.warmup,
        "sampler ready"
    );
    Ok(Sampler::from_config(clock, config))
}

/// Runs the validation strategies over each selected input set.
pub fn err_check_document(config: &BenchConfig) -> Result<Document<Tally>> {
    let strategies = ValidationStrategy::resolve(&config.validation)?;
    let mut sampler = prepare(config)?;

    let mut sections = Vec::new();
    for &set in config.inputs.sets() {
        let inputs = set.envelopes();
        tracing::info!(set = set.title(), records = inputs.len(), "validating");
        explain_rejections(inputs);

        let reports = ValidationSuite::new(inputs, strategies.clone()).run(&mut sampler)?;
        sections.push(Section {
            title: Some(set.title().to_string()),
            reports,
        });
    }

    Ok(Document {
        benchmark: "err_check",
        clock: sampler.clock_label(),
        sections,
    })
}

/// Runs the lookup strategies for the needle in the fixed haystack.
pub fn strcmp_document(config: &BenchConfig) -> Result<Document<LookupHit>> {
    let strategies = LookupStrategy::resolve(&config.lookup)?;
    let mut sampler = prepare(config)?;

    tracing::info!(candidates = HAYSTACK.len(), needle = NEEDLE, "searching");
    let reports = LookupSuite::new(HAYSTACK, NEEDLE, strategies).run(&mut sampler)?;

    Ok(Document {
        benchmark: "strcmp",
        clock: sampler.clock_label(),
        sections: vec![Section {
            title: None,
            reports,
        }],
    })
}
