use crate::error::{BenchError, Result};

/// Pins the calling thread to `core` so every timed region runs on the same
/// CPU and reads the same counter.
pub fn pin_current_thread(core: usize) -> Result<()> {
    let ids = core_affinity::get_core_ids().ok_or(BenchError::Affinity(core))?;
    let id = ids
        .into_iter()
        .find(|c| c.id == core)
        .ok_or(BenchError::Affinity(core))?;

    if !core_affinity::set_for_current(id) {
        return Err(BenchError::Affinity(core));
    }
    tracing::info!(core, "measurement thread pinned");
    Ok(())
}
