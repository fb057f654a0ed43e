#![no_std]
extern crate alloc;

pub mod envelope;
pub mod fixtures;
pub mod corpus;
pub mod hash;

pub use envelope::{Envelope, Fault, FaultMask, BOUND};
pub use fixtures::{InputSet, MIXED_INPUTS, VALID_INPUTS};
pub use corpus::{HAYSTACK, NEEDLE};
pub use hash::{djb2, PrecomputedHashes, DJB2_SEED};
