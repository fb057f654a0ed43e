//! Branch-prediction hints for stable Rust.
//!
//! The unexpected outcome calls a `#[cold]` function, which is enough for
//! LLVM to lay the hot path out as the fall-through.

#[inline(always)]
pub fn likely(b: bool) -> bool {
    if !b {
        cold_path();
    }
    b
}

#[inline(always)]
pub fn unlikely(b: bool) -> bool {
    if b {
        cold_path();
    }
    b
}

#[inline(never)]
#[cold]
fn cold_path() {}
