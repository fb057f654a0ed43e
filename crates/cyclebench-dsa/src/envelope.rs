use core::fmt;

/// Upper bound every coordinate must respect.
pub const BOUND: i32 = 100;

/// An axis-aligned rectangle described by its top-left and bottom-right corners.
///
/// The record is never normalised. Validity is a measured outcome, so
/// malformed envelopes are stored exactly as written.
///
/// Layout is fixed at 16 bytes so four records share a cache line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Envelope {
    pub top_left_x: i32,
    pub top_left_y: i32,
    pub bot_right_x: i32,
    pub bot_right_y: i32,
}

static_assertions::assert_eq_size!(Envelope, [u8; 16]);

impl Envelope {
    pub const fn new(top_left_x: i32, top_left_y: i32, bot_right_x: i32, bot_right_y: i32) -> Self {
        Self {
            top_left_x,
            top_left_y,
            bot_right_x,
            bot_right_y,
        }
    }

    /// Evaluates all six predicates without branching and returns the
    /// accumulated fault bits.
    #[inline(always)]
    pub fn faults(&self) -> FaultMask {
        let mut bits = 0u8;
        bits |= ((self.top_left_x > self.bot_right_x) as u8) << Fault::InvertedX.bit();
        bits |= ((self.top_left_y > self.bot_right_y) as u8) << Fault::InvertedY.bit();
        bits |= ((self.top_left_x > BOUND) as u8) << Fault::TopLeftX.bit();
        bits |= ((self.bot_right_x > BOUND) as u8) << Fault::BotRightX.bit();
        bits |= ((self.top_left_y > BOUND) as u8) << Fault::TopLeftY.bit();
        bits |= ((self.bot_right_y > BOUND) as u8) << Fault::BotRightY.bit();
        FaultMask(bits)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.faults().is_empty()
    }
}

/// One of the six envelope predicates, keyed by its bit in the error table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Fault {
    InvertedX = 1,
    InvertedY = 2,
    TopLeftX = 3,
    BotRightX = 4,
    TopLeftY = 5,
    BotRightY = 6,
}

impl Fault {
    pub const ALL: [Fault; 6] = [
        Fault::InvertedX,
        Fault::InvertedY,
        Fault::TopLeftX,
        Fault::BotRightX,
        Fault::TopLeftY,
        Fault::BotRightY,
    ];

    #[inline(always)]
    pub const fn bit(self) -> u8 {
        self as u8
    }

    pub const fn describe(self) -> &'static str {
        match self {
            Fault::InvertedX => "top left x past bot right x",
            Fault::InvertedY => "top left y past bot right y",
            Fault::TopLeftX => "top left max x",
            Fault::BotRightX => "bot right max x",
            Fault::TopLeftY => "top left max y",
            Fault::BotRightY => "bot right max y",
        }
    }
}

/// Error-table accumulator. Bit 0 is never set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FaultMask(pub u8);

impl FaultMask {
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, fault: Fault) -> bool {
        self.0 & (1u8 << fault.bit()) != 0
    }

    pub fn iter(self) -> impl Iterator<Item = Fault> {
        Fault::ALL.into_iter().filter(move |f| self.contains(*f))
    }
}

impl fmt::Display for FaultMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("valid");
        }
        for (i, fault) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(fault.describe())?;
        }
        Ok(())
    }
}
