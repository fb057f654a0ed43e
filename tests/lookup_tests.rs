//! # Lookup Strategy Tests
//!
//! All four search shapes must land on the same index (or the same miss),
//! and the prefix filter must never skip a real match.

use cyclebench_core::{BenchError, Monotonic, Sampler};
use cyclebench_dsa::{djb2, PrecomputedHashes, HAYSTACK, NEEDLE};
use cyclebench_lookup::strategies::{hash_ahead_of_time, hash_runtime, strcmp, strcmp_prefix};
use cyclebench_lookup::{LookupHit, LookupStrategy, LookupSuite};
use std::time::Instant;

fn all_find(haystack: &[&str], needle: &str) -> Vec<Option<usize>> {
    LookupStrategy::ALL
        .iter()
        .map(|s| s.find(haystack, needle))
        .collect()
}

/// Verifies every strategy finds "needle" in the last slot of the fixed list.
#[test]
fn test_needle_found_last() {
    let t = Instant::now();

    let last = HAYSTACK.len() - 1;
    for strategy in LookupStrategy::ALL {
        assert_eq!(
            strategy.find(HAYSTACK, NEEDLE),
            Some(last),
            "{} missed the needle",
            strategy.name()
        );
    }

    println!("test_needle_found_last: Testing Overhead = {:?}", t.elapsed());
}

/// Verifies agreement on a miss, a first-slot hit and duplicate entries.
#[test]
fn test_strategies_agree() {
    let cases: &[(&[&str], &str, Option<usize>)] = &[
        (&["a", "b", "c"], "needle", None),
        (&["needle", "b", "c"], "needle", Some(0)),
        (&["x", "needle", "needle"], "needle", Some(1)),
        (&[], "needle", None),
        (&["", "a"], "", Some(0)),
        (&["a", ""], "", Some(1)),
        (&["héllo", "hello"], "hello", Some(1)),
    ];

    for (haystack, needle, expected) in cases {
        for (strategy, found) in LookupStrategy::ALL.iter().zip(all_find(haystack, needle)) {
            assert_eq!(
                found,
                *expected,
                "{} on {:?} / {:?}",
                strategy.name(),
                haystack,
                needle
            );
        }
    }
}

/// Verifies candidates sharing the leading byte still get a full comparison.
#[test]
fn test_prefix_filter_has_no_false_negatives() {
    let haystack = ["n", "ne", "nee", "needles", "needlE", "needle", "needle!"];
    assert_eq!(strcmp_prefix(&haystack, "needle"), Some(5));
    assert_eq!(strcmp_prefix(&haystack, "needle"), strcmp(&haystack, "needle"));

    // The candidate directly after a prefix miss must still be inspected.
    let haystack = ["x", "needle"];
    assert_eq!(strcmp_prefix(&haystack, "needle"), Some(1));

    for (i, s) in HAYSTACK.iter().enumerate() {
        assert_eq!(strcmp_prefix(HAYSTACK, s), strcmp(HAYSTACK, s), "slot {}", i);
    }
}

/// Verifies precomputed and runtime hashing agree for every haystack entry.
#[test]
fn test_precomputed_matches_runtime() {
    let table = PrecomputedHashes::build(HAYSTACK);
    for s in HAYSTACK {
        assert_eq!(
            hash_ahead_of_time(&table, djb2(s.as_bytes())),
            hash_runtime(HAYSTACK, s),
            "mismatch for {:?}",
            s
        );
    }
    assert_eq!(hash_ahead_of_time(&table, djb2(b"absent")), None);
}

/// Verifies the suite reports names, hits and sample counts in order.
#[test]
fn test_suite_reports() {
    let t = Instant::now();

    let mut sampler = Sampler::new(Monotonic::new(), 2, 3);
    let reports = LookupSuite::with_defaults(HAYSTACK, NEEDLE)
        .run(&mut sampler)
        .unwrap();

    let names: Vec<&str> = reports.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["strcmp", "strcmp with prefix", "hash rt", "hash at"]);

    let expected = LookupHit::resolve(HAYSTACK, Some(HAYSTACK.len() - 1));
    for report in &reports {
        assert_eq!(report.outcome, expected);
        assert_eq!(report.outcome.value.as_deref(), Some("needle"));
        assert_eq!(report.cycles.len(), 3);
    }

    println!("test_suite_reports: Testing Overhead = {:?}", t.elapsed());
}

/// Verifies a miss is reported consistently and rendered as "Not found".
#[test]
fn test_suite_miss() {
    use cyclebench_core::OutcomeLine;

    let mut sampler = Sampler::new(Monotonic::new(), 0, 1);
    let reports = LookupSuite::with_defaults(HAYSTACK, "haystack")
        .run(&mut sampler)
        .unwrap();
    for report in &reports {
        assert!(!report.outcome.is_found());
        assert_eq!(report.outcome.outcome_line(), "Not found");
    }
}

/// Verifies strategy names resolve from config spellings.
#[test]
fn test_strategy_name_resolution() {
    assert_eq!(LookupStrategy::from_name("hash-at").unwrap(), LookupStrategy::HashAheadOfTime);
    assert_eq!(
        LookupStrategy::from_name("strcmp_with_prefix").unwrap(),
        LookupStrategy::StrcmpPrefix
    );
    assert_eq!(LookupStrategy::from_name("HASH RT").unwrap(), LookupStrategy::HashRuntime);
    assert!(matches!(
        LookupStrategy::from_name("memcmp"),
        Err(BenchError::Config(_))
    ));
    assert_eq!(LookupStrategy::resolve(&[]).unwrap(), LookupStrategy::ALL.to_vec());
}

/// Verifies a djb2 collision splits the hash strategies from the comparisons
/// and the suite refuses to report mismatched outcomes.
#[test]
fn test_suite_rejects_hash_collision() {
    assert_eq!(djb2(b"aB"), djb2(b"b!"));

    assert_eq!(strcmp(&["aB"], "b!"), None);
    assert_eq!(strcmp_prefix(&["aB"], "b!"), None);
    assert_eq!(hash_runtime(&["aB"], "b!"), Some(0));

    let mut sampler = Sampler::new(Monotonic::new(), 0, 1);
    let err = LookupSuite::with_defaults(&["aB"], "b!")
        .run(&mut sampler)
        .unwrap_err();
    match err {
        BenchError::Mismatch {
            strategy,
            expected,
            actual,
        } => {
            assert_eq!(strategy, "hash rt");
            assert_eq!(expected, "None (from strcmp)");
            assert_eq!(actual, "Some(0)");
        }
        other => panic!("expected a mismatch, got {other:?}"),
    }

    // Without the comparison strategies the collision counts as a hit.
    let hashes = vec![LookupStrategy::HashRuntime, LookupStrategy::HashAheadOfTime];
    let reports = LookupSuite::new(&["aB"], "b!", hashes)
        .run(&mut sampler)
        .unwrap();
    assert!(reports.iter().all(|r| r.outcome.is_found()));
}
