use alloc::boxed::Box;
use alloc::vec::Vec;

pub const DJB2_SEED: u64 = 5381;

/// djb2 rolling hash: `hash = hash * 33 + byte`, wrapping on overflow.
#[inline]
pub const fn djb2(bytes: &[u8]) -> u64 {
    let mut hash = DJB2_SEED;
    let mut i = 0;
    while i < bytes.len() {
        hash = (hash << 5).wrapping_add(hash).wrapping_add(bytes[i] as u64);
        i += 1;
    }
    hash
}

/// Hashes of a candidate list, computed once ahead of any search.
///
/// Slot `i` holds `djb2(candidates[i])`, so a hit position indexes straight
/// back into the source list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrecomputedHashes {
    hashes: Box<[u64]>,
}

impl PrecomputedHashes {
    pub fn build(candidates: &[&str]) -> Self {
        let hashes: Vec<u64> = candidates.iter().map(|s| djb2(s.as_bytes())).collect();
        Self {
            hashes: hashes.into_boxed_slice(),
        }
    }

    /// Linear scan for `hash`. Collisions are reported as hits.
    #[inline(always)]
    pub fn position(&self, hash: u64) -> Option<usize> {
        self.hashes.iter().position(|&h| h == hash)
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.hashes
    }
}
