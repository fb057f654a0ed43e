use crate::Envelope;

const fn env(tlx: i32, tly: i32, brx: i32, bry: i32) -> Envelope {
    Envelope::new(tlx, tly, brx, bry)
}

/// Fourteen distinct records alternating valid / invalid.
const MIXED_BLOCK: [Envelope; 14] = [
    env(0, 0, 10, 10),     // valid
    env(10, 10, 0, 0),     // bot right less than top left
    env(30, 30, 40, 40),   // valid
    env(30, 30, 20, 40),   // bot right x
    env(50, 50, 90, 90),   // valid
    env(30, 30, 40, 10),   // bot right y
    env(40, 40, 50, 60),   // valid
    env(50, 50, 200, 90),  // bot right max x
    env(3, 4, 5, 5),       // valid
    env(4, 4, 5, 200),     // bot right max y
    env(10, 10, 13, 13),   // valid
    env(20, 200, 30, 300), // top left max y
    env(50, 30, 60, 70),   // valid
    env(200, 20, 300, 30), // top left max x
];

const VALID_BLOCK: [Envelope; 7] = [
    env(0, 0, 10, 10),
    env(30, 30, 40, 40),
    env(50, 50, 90, 90),
    env(40, 40, 50, 60),
    env(3, 4, 5, 5),
    env(10, 10, 13, 13),
    env(50, 30, 60, 70),
];

const fn repeat<const B: usize, const N: usize>(block: [Envelope; B]) -> [Envelope; N] {
    let mut out = [env(0, 0, 0, 0); N];
    let mut i = 0;
    while i < N {
        out[i] = block[i % B];
        i += 1;
    }
    out
}

/// The mixed block, twice.
pub const MIXED_INPUTS: [Envelope; 28] = repeat(MIXED_BLOCK);

/// The seven valid records, four times.
pub const VALID_INPUTS: [Envelope; 28] = repeat(VALID_BLOCK);

/// Number of distinct records in one mixed block.
pub const MIXED_BLOCK_LEN: usize = MIXED_BLOCK.len();

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputSet {
    Mixed,
    Valid,
}

impl InputSet {
    pub const ALL: [InputSet; 2] = [InputSet::Mixed, InputSet::Valid];

    pub fn envelopes(self) -> &'static [Envelope] {
        match self {
            InputSet::Mixed => &MIXED_INPUTS,
            InputSet::Valid => &VALID_INPUTS,
        }
    }

    /// Heading printed above the set's results.
    pub const fn title(self) -> &'static str {
        match self {
            InputSet::Mixed => "Mixed Inputs",
            InputSet::Valid => "Valid Inputs",
        }
    }
}
