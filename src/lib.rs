//! # cyclebench
//!
//! Drivers for the envelope-validation and string-lookup micro-benchmarks.
//! The strategy families live in `cyclebench-validate` and
//! `cyclebench-lookup`; this crate wires them to a clock, a config and stdout.

pub mod cli;
pub mod driver;

pub use driver::{err_check_document, init_tracing, strcmp_document};
