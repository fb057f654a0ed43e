use std::cmp::Ordering;

use cyclebench_core::{BenchError, OutcomeLine, Result};
use cyclebench_dsa::{djb2, PrecomputedHashes};
use serde::Serialize;

/// Where the needle was found, if anywhere.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LookupHit {
    pub index: Option<usize>,
    pub value: Option<String>,
}

impl LookupHit {
    pub fn resolve(haystack: &[&str], index: Option<usize>) -> Self {
        Self {
            index,
            value: index.and_then(|i| haystack.get(i)).map(|s| s.to_string()),
        }
    }

    pub fn is_found(&self) -> bool {
        self.index.is_some()
    }
}

impl OutcomeLine for LookupHit {
    fn outcome_line(&self) -> String {
        match &self.value {
            Some(value) => format!("Found {value}"),
            None => "Not found".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LookupStrategy {
    Strcmp,
    StrcmpPrefix,
    HashRuntime,
    HashAheadOfTime,
}

impl LookupStrategy {
    pub const ALL: [LookupStrategy; 4] = [
        LookupStrategy::Strcmp,
        LookupStrategy::StrcmpPrefix,
        LookupStrategy::HashRuntime,
        LookupStrategy::HashAheadOfTime,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            LookupStrategy::Strcmp => "strcmp",
            LookupStrategy::StrcmpPrefix => "strcmp with prefix",
            LookupStrategy::HashRuntime => "hash rt",
            LookupStrategy::HashAheadOfTime => "hash at",
        }
    }

    /// Accepts the printed name, case-insensitively, with `-` or `_` for spaces.
    pub fn from_name(name: &str) -> Result<Self> {
        let wanted = name.replace(['-', '_'], " ").to_lowercase();
        Self::ALL
            .into_iter()
            .find(|s| s.name() == wanted)
            .ok_or_else(|| BenchError::Config(format!("unknown lookup strategy `{name}`")))
    }

    /// Resolves configured names; an empty list selects every strategy.
    pub fn resolve(names: &[String]) -> Result<Vec<Self>> {
        if names.is_empty() {
            return Ok(Self::ALL.to_vec());
        }
        names.iter().map(|n| Self::from_name(n)).collect()
    }

    /// Untimed search. `hash at` builds its table on the spot.
    pub fn find(self, haystack: &[&str], needle: &str) -> Option<usize> {
        match self {
            LookupStrategy::Strcmp => strcmp(haystack, needle),
            LookupStrategy::StrcmpPrefix => strcmp_prefix(haystack, needle),
            LookupStrategy::HashRuntime => hash_runtime(haystack, needle),
            LookupStrategy::HashAheadOfTime => {
                let table = PrecomputedHashes::build(haystack);
                hash_ahead_of_time(&table, djb2(needle.as_bytes()))
            }
        }
    }
}

/// Byte-wise lexicographic comparison, like C `strcmp`.
#[inline(always)]
fn same(a: &str, b: &str) -> bool {
    a.as_bytes().cmp(b.as_bytes()) == Ordering::Equal
}

/// Full comparison against every candidate.
pub fn strcmp(haystack: &[&str], needle: &str) -> Option<usize> {
    for (i, candidate) in haystack.iter().enumerate() {
        if same(candidate, needle) {
            return Some(i);
        }
    }
    None
}

/// Checks the leading byte first and only pays for a full comparison when it
/// matches. Two empty strings share the "no leading byte" prefix.
pub fn strcmp_prefix(haystack: &[&str], needle: &str) -> Option<usize> {
    let lead = needle.as_bytes().first();
    for (i, candidate) in haystack.iter().enumerate() {
        if candidate.as_bytes().first() != lead {
            continue;
        }
        if same(candidate, needle) {
            return Some(i);
        }
    }
    None
}

/// Hashes the needle and every candidate during the search.
pub fn hash_runtime(haystack: &[&str], needle: &str) -> Option<usize> {
    let search_hash = djb2(needle.as_bytes());
    for (i, candidate) in haystack.iter().enumerate() {
        if djb2(candidate.as_bytes()) == search_hash {
            return Some(i);
        }
    }
    None
}

/// Compares precomputed hashes only.
#[inline]
pub fn hash_ahead_of_time(table: &PrecomputedHashes, search_hash: u64) -> Option<usize> {
    table.position(search_hash)
}
