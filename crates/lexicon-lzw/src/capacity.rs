//! Code width and dictionary capacity policy.
//!
//! A session's dictionary holds at most `2^max_bits` entries. The first
//! [`LITERAL_COUNT`] are the single-byte literals; every later code is handed
//! out once, in increasing order, until the ceiling is reached. After that the
//! dictionary is frozen: encoder and decoder keep working with the entries
//! they already have.

use lexicon_core::{Error, Result};

/// Dictionary code. Every width up to 16 bits fits.
pub type Code = u16;

/// Number of pre-seeded single-byte entries.
pub const LITERAL_COUNT: usize = 256;

/// Smallest width that leaves room for entries beyond the literals.
pub const MIN_MAX_BITS: u32 = 9;

/// Largest width representable by the 2-byte wire format.
pub const MAX_MAX_BITS: u32 = 16;

/// Width used when nothing else is configured.
pub const DEFAULT_MAX_BITS: u32 = 12;

/// Validated code width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaxBits(u32);

impl MaxBits {
    /// Validate a width against `[MIN_MAX_BITS, MAX_MAX_BITS]`.
    pub fn new(bits: u32) -> Result<Self> {
        if !(MIN_MAX_BITS..=MAX_MAX_BITS).contains(&bits) {
            return Err(Error::invalid_config(bits, MIN_MAX_BITS, MAX_MAX_BITS));
        }
        Ok(Self(bits))
    }

    /// Width in bits.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Maximum number of live dictionary entries.
    pub fn capacity(self) -> usize {
        1usize << self.0
    }

    /// The next smaller valid width, if any.
    pub fn narrower(self) -> Option<Self> {
        Self::new(self.0 - 1).ok()
    }
}

impl Default for MaxBits {
    fn default() -> Self {
        Self(DEFAULT_MAX_BITS)
    }
}

impl core::fmt::Display for MaxBits {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Allocator for the codes of one session.
#[derive(Debug, Clone)]
pub struct Capacity {
    max_bits: MaxBits,
    next_code: usize,
}

impl Capacity {
    /// Fresh policy with only the literals allocated.
    pub fn new(max_bits: MaxBits) -> Self {
        Self {
            max_bits,
            next_code: LITERAL_COUNT,
        }
    }

    /// Width this policy enforces.
    pub fn max_bits(&self) -> MaxBits {
        self.max_bits
    }

    /// Entry ceiling.
    pub fn limit(&self) -> usize {
        self.max_bits.capacity()
    }

    /// Live entries, literals included. Equal to the next code to assign.
    pub fn entries(&self) -> usize {
        self.next_code
    }

    /// Whether another entry may be created.
    pub fn has_room(&self) -> bool {
        self.next_code < self.limit()
    }

    /// Hand out the next code, or `None` once the dictionary is frozen.
    pub fn allocate(&mut self) -> Option<Code> {
        if !self.has_room() {
            return None;
        }
        let code = self.next_code as Code;
        self.next_code += 1;
        Some(code)
    }

    /// Summary of the session after `codes` codes went through it.
    pub fn session_stats(&self, codes: usize) -> SessionStats {
        SessionStats {
            max_bits: self.max_bits,
            codes,
            entries: self.entries(),
            capacity_reached: !self.has_room(),
        }
    }
}

/// What a finished encoder or decoder session looked like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    /// Width the session ran with.
    pub max_bits: MaxBits,
    /// Codes emitted (encoder) or consumed (decoder).
    pub codes: usize,
    /// Live dictionary entries at the end of the session.
    pub entries: usize,
    /// Whether insertion was frozen before the session ended.
    pub capacity_reached: bool,
}
