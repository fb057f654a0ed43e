use std::hint::black_box;
use std::time::Instant;

use serde::Deserialize;

use crate::error::{BenchError, Result};

/// A monotonically increasing tick source read at the edges of a timed region.
///
/// Ticks are only comparable within one source: TSC cycles, perf cycles and
/// nanoseconds do not mix.
pub trait CycleSource {
    fn now(&mut self) -> u64;
    fn label(&self) -> &'static str;
}

impl<C: CycleSource + ?Sized> CycleSource for &mut C {
    #[inline(always)]
    fn now(&mut self) -> u64 {
        (**self).now()
    }

    fn label(&self) -> &'static str {
        (**self).label()
    }
}

/// Reads `clock`, runs `f`, reads `clock` again.
#[inline(always)]
pub fn measure<C, R, F>(clock: &mut C, f: F) -> (R, u64)
where
    C: CycleSource + ?Sized,
    F: FnOnce() -> R,
{
    let start = clock.now();
    let out = black_box(f());
    let end = clock.now();
    (out, end.saturating_sub(start))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockKind {
    /// TSC where the CPU has one, monotonic nanoseconds elsewhere.
    #[default]
    Auto,
    Tsc,
    Monotonic,
    Perf,
}

impl ClockKind {
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "auto" => Ok(ClockKind::Auto),
            "tsc" => Ok(ClockKind::Tsc),
            "monotonic" => Ok(ClockKind::Monotonic),
            "perf" => Ok(ClockKind::Perf),
            other => Err(BenchError::Config(format!("unknown clock `{other}`"))),
        }
    }
}

/// x86 time-stamp counter.
#[derive(Debug, Clone, Copy)]
pub struct Tsc {
    _private: (),
}

impl Tsc {
    pub fn new() -> Option<Self> {
        if cfg!(any(target_arch = "x86", target_arch = "x86_64")) {
            Some(Self { _private: () })
        } else {
            None
        }
    }
}

impl CycleSource for Tsc {
    #[inline(always)]
    fn now(&mut self) -> u64 {
        rdtsc()
    }

    fn label(&self) -> &'static str {
        "tsc"
    }
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn rdtsc() -> u64 {
    unsafe { std::arch::x86_64::_rdtsc() }
}
#[cfg(target_arch = "x86")]
#[inline(always)]
fn rdtsc() -> u64 {
    unsafe { std::arch::x86::_rdtsc() }
}
#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
fn rdtsc() -> u64 {
    0
}

/// Nanoseconds since the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct Monotonic {
    origin: Instant,
}

impl Monotonic {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for Monotonic {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleSource for Monotonic {
    #[inline(always)]
    fn now(&mut self) -> u64 {
        self.origin.elapsed().as_nanos() as u64
    }

    fn label(&self) -> &'static str {
        "monotonic-ns"
    }
}

/// Hardware `CPU_CYCLES` counter from the perf subsystem.
///
/// Needs `perf_event_paranoid <= 2` or `CAP_PERFMON`.
#[cfg(target_os = "linux")]
pub struct PerfCycles {
    counter: perf_event::Counter,
}

#[cfg(target_os = "linux")]
impl PerfCycles {
    pub fn new() -> Result<Self> {
        use perf_event::events::Hardware;

        let mut counter = perf_event::Builder::new()
            .kind(Hardware::CPU_CYCLES)
            .build()
            .map_err(|e| BenchError::Clock(format!("perf cycles counter: {e}")))?;
        counter
            .enable()
            .map_err(|e| BenchError::Clock(format!("perf cycles counter: {e}")))?;
        Ok(Self { counter })
    }
}

#[cfg(target_os = "linux")]
impl CycleSource for PerfCycles {
    #[inline(always)]
    fn now(&mut self) -> u64 {
        // A failed read reports zero; `measure` saturates so the region shows 0.
        self.counter.read().unwrap_or(0)
    }

    fn label(&self) -> &'static str {
        "perf-cycles"
    }
}

/// Static dispatch over every available tick source.
pub enum Clock {
    Tsc(Tsc),
    Monotonic(Monotonic),
    #[cfg(target_os = "linux")]
    Perf(PerfCycles),
}

impl Clock {
    pub fn open(kind: ClockKind) -> Result<Self> {
        match kind {
            ClockKind::Auto => Ok(Tsc::new()
                .map(Clock::Tsc)
                .unwrap_or_else(|| Clock::Monotonic(Monotonic::new()))),
            ClockKind::Tsc => Tsc::new()
                .map(Clock::Tsc)
                .ok_or_else(|| BenchError::Clock("no time-stamp counter on this target".into())),
            ClockKind::Monotonic => Ok(Clock::Monotonic(Monotonic::new())),
            #[cfg(target_os = "linux")]
            ClockKind::Perf => PerfCycles::new().map(Clock::Perf),
            #[cfg(not(target_os = "linux"))]
            ClockKind::Perf => Err(BenchError::Clock("perf counters need linux".into())),
        }
    }

    /// Like [`Clock::open`], but degrades to [`Monotonic`] with a warning.
    pub fn open_or_fallback(kind: ClockKind) -> Self {
        match Self::open(kind) {
            Ok(clock) => clock,
            Err(e) => {
                tracing::warn!(requested = ?kind, error = %e, "falling back to monotonic clock");
                Clock::Monotonic(Monotonic::new())
            }
        }
    }
}

impl CycleSource for Clock {
    #[inline(always)]
    fn now(&mut self) -> u64 {
        match self {
            Clock::Tsc(c) => c.now(),
            Clock::Monotonic(c) => c.now(),
            #[cfg(target_os = "linux")]
            Clock::Perf(c) => c.now(),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Clock::Tsc(c) => c.label(),
            Clock::Monotonic(c) => c.label(),
            #[cfg(target_os = "linux")]
            Clock::Perf(c) => c.label(),
        }
    }
}
