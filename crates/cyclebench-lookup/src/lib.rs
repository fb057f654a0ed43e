pub mod strategies;
pub mod suite;

pub use strategies::{LookupHit, LookupStrategy};
pub use suite::LookupSuite;
