pub mod affinity;
pub mod clock;
pub mod config;
pub mod error;
pub mod hints;
pub mod report;
pub mod sampler;

pub use affinity::pin_current_thread;
pub use clock::{measure, Clock, ClockKind, CycleSource, Monotonic, Tsc};
pub use config::{BenchConfig, InputSelection, OutputFormat};
pub use error::{BenchError, Result};
pub use report::{Document, OutcomeLine, Report, Section};
pub use sampler::Sampler;

pub use cyclebench_dsa::InputSet;
