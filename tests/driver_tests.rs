//! # Driver Tests: CLI Layering and End-to-End Documents
//!
//! Validates flag/config precedence and that both drivers produce the
//! classic result layout from the compiled-in fixtures.

use cyclebench::cli::{self, Bench};
use cyclebench::{err_check_document, strcmp_document};
use cyclebench_core::{BenchConfig, BenchError, ClockKind, InputSelection, OutputFormat};
use cyclebench_dsa::HAYSTACK;
use std::io::Write;
use std::time::Instant;

fn parse(bench: Bench, args: &[&str]) -> Result<BenchConfig, BenchError> {
    let matches = cli::command(bench)
        .try_get_matches_from(args)
        .expect("arguments must parse");
    cli::config_from_matches(bench, &matches)
}

fn monotonic(inputs: InputSelection) -> BenchConfig {
    BenchConfig {
        inputs,
        clock: ClockKind::Monotonic,
        ..BenchConfig::default()
    }
}

/// Verifies a bare invocation yields the default config.
#[test]
fn test_cli_no_arguments() {
    let config = parse(Bench::ErrCheck, &["bench_err_check"]).unwrap();
    assert_eq!(config, BenchConfig::default());
}

/// Verifies every flag lands in the config.
#[test]
fn test_cli_flags() {
    let config = parse(
        Bench::ErrCheck,
        &[
            "bench_err_check",
            "--inputs",
            "mixed",
            "--strategy",
            "branch-tree",
            "-s",
            "error table",
            "--iterations",
            "5",
            "--warmup",
            "2",
            "--clock",
            "monotonic",
            "--pin-core",
            "0",
            "--json",
        ],
    )
    .unwrap();

    assert_eq!(config.inputs, InputSelection::Mixed);
    assert_eq!(config.validation, vec!["branch-tree", "error table"]);
    assert!(config.lookup.is_empty());
    assert_eq!(config.iterations, 5);
    assert_eq!(config.warmup, 2);
    assert_eq!(config.clock, ClockKind::Monotonic);
    assert_eq!(config.pin_core, Some(0));
    assert_eq!(config.format, OutputFormat::Json);
}

/// Verifies flags override the config file, which overrides defaults.
#[test]
fn test_cli_overrides_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "iterations = 9\nwarmup = 3\nlookup = [\"strcmp\"]").unwrap();
    let path = file.path().to_str().unwrap();

    let config = parse(
        Bench::Strcmp,
        &["bench_strcmp", "--config", path, "--iterations", "2", "-s", "hash at"],
    )
    .unwrap();
    assert_eq!(config.iterations, 2);
    assert_eq!(config.warmup, 3, "untouched keys keep the file value");
    assert_eq!(config.lookup, vec!["hash at"]);
}

/// Verifies zero iterations from the command line is rejected.
#[test]
fn test_cli_rejects_zero_iterations() {
    let err = parse(Bench::Strcmp, &["bench_strcmp", "-i", "0"]).unwrap_err();
    assert!(matches!(err, BenchError::Config(_)));
}

/// Verifies the lookup driver has no input-set switch.
#[test]
fn test_strcmp_has_no_inputs_flag() {
    let res = cli::command(Bench::Strcmp).try_get_matches_from(["bench_strcmp", "--inputs", "mixed"]);
    assert!(res.is_err());
}

/// Verifies the validation driver covers both sets with consistent tallies.
#[test]
fn test_err_check_document() {
    let t = Instant::now();

    let mut config = monotonic(InputSelection::All);
    config.iterations = 3;
    let doc = err_check_document(&config).unwrap();

    assert_eq!(doc.benchmark, "err_check");
    assert_eq!(doc.clock, "monotonic-ns");
    assert_eq!(doc.sections.len(), 2);
    assert_eq!(doc.sections[0].title.as_deref(), Some("Mixed Inputs"));
    assert_eq!(doc.sections[1].title.as_deref(), Some("Valid Inputs"));

    for report in &doc.sections[0].reports {
        if report.name == "no check" {
            continue;
        }
        assert_eq!((report.outcome.valid, report.outcome.invalid), (14, 14));
        assert_eq!(report.cycles.len(), 3);
    }
    for report in &doc.sections[1].reports {
        assert_eq!((report.outcome.valid, report.outcome.invalid), (28, 0));
    }

    println!("test_err_check_document: Testing Overhead = {:?}", t.elapsed());
}

/// Verifies a strategy subset and the human layout end to end.
#[test]
fn test_err_check_subset_rendering() {
    let mut config = monotonic(InputSelection::Valid);
    config.validation = vec!["giant check".to_string()];
    let doc = err_check_document(&config).unwrap();

    let mut out = Vec::new();
    doc.render(OutputFormat::Human, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Valid Inputs");
    assert_eq!(lines[1], "============");
    assert_eq!(lines[2], "Valid/Invalid: 28 0");
    assert!(lines[3].starts_with("giant check: "));
    assert_eq!(lines[4], "--");
    assert_eq!(lines.len(), 5);
}

/// Verifies an unknown strategy name fails before any timing.
#[test]
fn test_unknown_strategy() {
    let mut config = monotonic(InputSelection::Mixed);
    config.validation = vec!["duff's device".to_string()];
    assert!(matches!(err_check_document(&config), Err(BenchError::Config(_))));

    let mut config = monotonic(InputSelection::Mixed);
    config.lookup = vec!["bloom".to_string()];
    assert!(matches!(strcmp_document(&config), Err(BenchError::Config(_))));
}

/// Verifies the lookup driver reports the needle from every strategy.
#[test]
fn test_strcmp_document() {
    let t = Instant::now();

    let doc = strcmp_document(&monotonic(InputSelection::All)).unwrap();
    assert_eq!(doc.sections.len(), 1);
    assert!(doc.sections[0].title.is_none());

    let reports = &doc.sections[0].reports;
    assert_eq!(reports.len(), 4);
    for report in reports {
        assert_eq!(report.outcome.index, Some(HAYSTACK.len() - 1));
        assert_eq!(report.outcome.value.as_deref(), Some("needle"));
    }

    let mut out = Vec::new();
    doc.render(OutputFormat::Human, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("Found needle").count(), 4);
    assert_eq!(text.matches("\n--\n").count(), 4);
    assert!(text.contains("strcmp with prefix: "));
    assert!(text.contains("hash at: "));

    println!("test_strcmp_document: Testing Overhead = {:?}", t.elapsed());
}

/// Verifies the JSON document round-trips through serde_json.
#[test]
fn test_strcmp_json() {
    let doc = strcmp_document(&monotonic(InputSelection::All)).unwrap();
    let mut out = Vec::new();
    doc.render(OutputFormat::Json, &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["benchmark"], "strcmp");
    let reports = value["sections"][0]["reports"].as_array().unwrap();
    assert_eq!(reports.len(), 4);
    assert_eq!(reports[3]["name"], "hash at");
    assert_eq!(reports[3]["outcome"]["value"], "needle");
    assert!(value["sections"][0].get("title").is_none());
}
