//! # cyclebench-validate: Envelope Validation Strategies
//!
//! Six control-flow shapes for the same six-predicate check. The five checking
//! strategies always agree on the tally; only their cycle counts differ.

pub mod strategies;
pub mod suite;

pub use strategies::{Tally, ValidationStrategy};
pub use suite::{explain_rejections, ValidationSuite};

#[cfg(kani)]
mod proofs {
    use super::strategies::*;
    use cyclebench_dsa::Envelope;

    #[kani::proof]
    fn prove_error_table_matches_branch_chain() {
        let env = Envelope::new(kani::any(), kani::any(), kani::any(), kani::any());
        let one = [env];

        // Every shape must classify an arbitrary record identically.
        let expected = branches(&one);
        assert!(unlikely_branches(&one) == expected);
        assert!(giant_check(&one) == expected);
        assert!(branch_tree(&one) == expected);
        assert!(error_table(&one) == expected);
    }
}
