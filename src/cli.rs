use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command};
use cyclebench_core::{BenchConfig, ClockKind, InputSelection, OutputFormat, Result};

/// Which driver the command line is built for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bench {
    ErrCheck,
    Strcmp,
}

pub fn command(bench: Bench) -> Command {
    let (name, about) = match bench {
        Bench::ErrCheck => (
            "bench_err_check",
            "Envelope validation: branches vs. hints vs. bitmask tables",
        ),
        Bench::Strcmp => (
            "bench_strcmp",
            "String lookup: strcmp vs. prefix filter vs. runtime / precomputed hashing",
        ),
    };

    let mut cmd = Command::new(name)
        .version(env!("CARGO_PKG_VERSION"))
        .about(about)
        .arg(
            Arg::new("config")
                .help("TOML file with run parameters")
                .long("config")
                .short('c')
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("strategy")
                .help("Run only this strategy (repeatable), e.g. \"branch tree\" or hash-at")
                .long("strategy")
                .short('s')
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("iterations")
                .help("Timed runs per strategy")
                .long("iterations")
                .short('i')
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("warmup")
                .help("Untimed runs before measurement")
                .long("warmup")
                .short('w')
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("clock")
                .help("Tick source")
                .long("clock")
                .value_parser(["auto", "tsc", "monotonic", "perf"]),
        )
        .arg(
            Arg::new("pin_core")
                .help("Pin the measuring thread to this core")
                .long("pin-core")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("json")
                .help("Emit JSON instead of text")
                .long("json")
                .action(ArgAction::SetTrue),
        );

    if bench == Bench::ErrCheck {
        cmd = cmd.arg(
            Arg::new("inputs")
                .help("Input set to validate")
                .long("inputs")
                .value_parser(["mixed", "valid", "all"]),
        );
    }
    cmd
}

/// Builds the run config: defaults, then the `--config` file, then flags.
pub fn config_from_matches(bench: Bench, matches: &ArgMatches) -> Result<BenchConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => BenchConfig::load(path)?,
        None => BenchConfig::default(),
    };

    if let Some(strategies) = matches.get_many::<String>("strategy") {
        let names: Vec<String> = strategies.cloned().collect();
        match bench {
            Bench::ErrCheck => config.validation = names,
            Bench::Strcmp => config.lookup = names,
        }
    }
    if let Some(&iterations) = matches.get_one::<usize>("iterations") {
        config.iterations = iterations;
    }
    if let Some(&warmup) = matches.get_one::<usize>("warmup") {
        config.warmup = warmup;
    }
    if let Some(clock) = matches.get_one::<String>("clock") {
        config.clock = ClockKind::parse(clock)?;
    }
    if let Some(&core) = matches.get_one::<usize>("pin_core") {
        config.pin_core = Some(core);
    }
    if matches.get_flag("json") {
        config.format = OutputFormat::Json;
    }
    if bench == Bench::ErrCheck {
        if let Some(inputs) = matches.get_one::<String>("inputs") {
            config.inputs = InputSelection::parse(inputs)?;
        }
    }

    config.validate()?;
    Ok(config)
}
