use std::hint::black_box;

use cyclebench_core::hints::unlikely;
use cyclebench_core::{BenchError, OutcomeLine, Result};
use cyclebench_dsa::{Envelope, BOUND};
use serde::Serialize;

/// Accepted / rejected counts for one pass over an input set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Tally {
    pub valid: u64,
    pub invalid: u64,
}

impl Tally {
    pub fn total(&self) -> u64 {
        self.valid + self.invalid
    }
}

impl OutcomeLine for Tally {
    fn outcome_line(&self) -> String {
        format!("Valid/Invalid: {} {}", self.valid, self.invalid)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValidationStrategy {
    /// Control: walks the inputs and accepts everything.
    NoCheck,
    Branches,
    UnlikelyBranches,
    GiantCheck,
    BranchTree,
    ErrorTable,
}

impl ValidationStrategy {
    /// The checking strategies, in print order.
    pub const ALL: [ValidationStrategy; 5] = [
        ValidationStrategy::Branches,
        ValidationStrategy::UnlikelyBranches,
        ValidationStrategy::GiantCheck,
        ValidationStrategy::BranchTree,
        ValidationStrategy::ErrorTable,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ValidationStrategy::NoCheck => "no check",
            ValidationStrategy::Branches => "branches",
            ValidationStrategy::UnlikelyBranches => "unlikely branches",
            ValidationStrategy::GiantCheck => "giant check",
            ValidationStrategy::BranchTree => "branch tree",
            ValidationStrategy::ErrorTable => "Error Table",
        }
    }

    pub const fn is_baseline(self) -> bool {
        matches!(self, ValidationStrategy::NoCheck)
    }

    /// Accepts the printed name, case-insensitively, with `-` or `_` for spaces.
    pub fn from_name(name: &str) -> Result<Self> {
        let wanted = name.replace(['-', '_'], " ").to_lowercase();
        std::iter::once(ValidationStrategy::NoCheck)
            .chain(Self::ALL)
            .find(|s| s.name().to_lowercase() == wanted)
            .ok_or_else(|| BenchError::Config(format!("unknown validation strategy `{name}`")))
    }

    /// Every checking strategy, led by the baseline when the `baseline`
    /// feature is on.
    pub fn defaults() -> Vec<Self> {
        let mut all = Vec::with_capacity(Self::ALL.len() + 1);
        if cyclebench_core::config::BASELINE_BY_DEFAULT {
            all.push(ValidationStrategy::NoCheck);
        }
        all.extend(Self::ALL);
        all
    }

    /// Resolves configured names; an empty list selects [`Self::defaults`].
    pub fn resolve(names: &[String]) -> Result<Vec<Self>> {
        if names.is_empty() {
            return Ok(Self::defaults());
        }
        names.iter().map(|n| Self::from_name(n)).collect()
    }

    /// The loop this strategy times.
    pub fn kernel(self) -> fn(&[Envelope]) -> Tally {
        match self {
            ValidationStrategy::NoCheck => no_check,
            ValidationStrategy::Branches => branches,
            ValidationStrategy::UnlikelyBranches => unlikely_branches,
            ValidationStrategy::GiantCheck => giant_check,
            ValidationStrategy::BranchTree => branch_tree,
            ValidationStrategy::ErrorTable => error_table,
        }
    }

    #[inline]
    pub fn tally(self, inputs: &[Envelope]) -> Tally {
        (self.kernel())(inputs)
    }
}

pub fn no_check(inputs: &[Envelope]) -> Tally {
    let mut tally = Tally::default();
    for env in inputs {
        black_box(env);
        tally.valid += 1;
    }
    tally
}

/// Independent `if` per predicate, each exiting early.
pub fn branches(inputs: &[Envelope]) -> Tally {
    let mut tally = Tally::default();
    for env in inputs {
        if env.top_left_x > env.bot_right_x {
            tally.invalid += 1;
            continue;
        }
        if env.top_left_y > env.bot_right_y {
            tally.invalid += 1;
            continue;
        }
        if env.top_left_x > BOUND {
            tally.invalid += 1;
            continue;
        }
        if env.bot_right_x > BOUND {
            tally.invalid += 1;
            continue;
        }
        if env.top_left_y > BOUND {
            tally.invalid += 1;
            continue;
        }
        if env.bot_right_y > BOUND {
            tally.invalid += 1;
            continue;
        }
        tally.valid += 1;
    }
    tally
}

/// Same chain as [`branches`], every rejection marked cold.
pub fn unlikely_branches(inputs: &[Envelope]) -> Tally {
    let mut tally = Tally::default();
    for env in inputs {
        if unlikely(env.top_left_x > env.bot_right_x) {
            tally.invalid += 1;
            continue;
        } else if unlikely(env.top_left_y > env.bot_right_y) {
            tally.invalid += 1;
            continue;
        } else if unlikely(env.top_left_x > BOUND) {
            tally.invalid += 1;
            continue;
        } else if unlikely(env.bot_right_x > BOUND) {
            tally.invalid += 1;
            continue;
        } else if unlikely(env.top_left_y > BOUND) {
            tally.invalid += 1;
            continue;
        } else if unlikely(env.bot_right_y > BOUND) {
            tally.invalid += 1;
            continue;
        }
        tally.valid += 1;
    }
    tally
}

/// One short-circuiting `||` over all six predicates.
pub fn giant_check(inputs: &[Envelope]) -> Tally {
    let mut tally = Tally::default();
    for env in inputs {
        if (env.top_left_x > env.bot_right_x)
            || (env.top_left_y > env.bot_right_y)
            || (env.top_left_x > BOUND)
            || (env.bot_right_x > BOUND)
            || (env.top_left_y > BOUND)
            || (env.bot_right_y > BOUND)
        {
            tally.invalid += 1;
            continue;
        }
        tally.valid += 1;
    }
    tally
}

/// Mutually exclusive `if` / `else if` ladder ending in the valid arm.
pub fn branch_tree(inputs: &[Envelope]) -> Tally {
    let mut tally = Tally::default();
    for env in inputs {
        if env.top_left_x > env.bot_right_x {
            tally.invalid += 1;
        } else if env.top_left_y > env.bot_right_y {
            tally.invalid += 1;
        } else if env.top_left_x > BOUND {
            tally.invalid += 1;
        } else if env.bot_right_x > BOUND {
            tally.invalid += 1;
        } else if env.top_left_y > BOUND {
            tally.invalid += 1;
        } else if env.bot_right_y > BOUND {
            tally.invalid += 1;
        } else {
            tally.valid += 1;
        }
    }
    tally
}

/// All six predicates folded into a bitmask, then a single branch.
pub fn error_table(inputs: &[Envelope]) -> Tally {
    let mut tally = Tally::default();
    for env in inputs {
        let mut err = 0u64;
        err |= ((env.top_left_x > env.bot_right_x) as u64) << 1;
        err |= ((env.top_left_y > env.bot_right_y) as u64) << 2;
        err |= ((env.top_left_x > BOUND) as u64) << 3;
        err |= ((env.bot_right_x > BOUND) as u64) << 4;
        err |= ((env.top_left_y > BOUND) as u64) << 5;
        err |= ((env.bot_right_y > BOUND) as u64) << 6;

        if err != 0 {
            tally.invalid += 1;
        } else {
            tally.valid += 1;
        }
    }
    tally
}
