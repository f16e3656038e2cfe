//! Greedy longest-match LZW encoder.
//!
//! At every position the encoder takes the longest dictionary entry that
//! prefixes the remaining input, emits its code and, while the dictionary has
//! room, registers that entry extended by the following byte. Because every
//! entry's prefixes are entries too, this is the same parse as growing the
//! current match one byte at a time until it falls out of the dictionary.

use lexicon_core::{Error, Result};
use tracing::debug;

use crate::capacity::{Capacity, Code, MaxBits, SessionStats};
use crate::trie::Trie;

/// One encoding session.
///
/// Owns its dictionary; a new session starts from the literals only. A
/// session encodes a single stream and keeps the dictionary it built for
/// inspection afterwards.
#[derive(Debug, Clone)]
pub struct Encoder {
    trie: Trie,
    capacity: Capacity,
    used: bool,
}

impl Encoder {
    /// Fresh session at the given width.
    pub fn new(max_bits: MaxBits) -> Self {
        Self {
            trie: Trie::with_literals(),
            capacity: Capacity::new(max_bits),
            used: false,
        }
    }

    /// Encode `input` with this session's dictionary.
    ///
    /// The decoder cannot follow a second stream on a grown dictionary, so a
    /// session that already encoded something is rejected.
    pub fn encode(&mut self, input: &[u8]) -> Result<(Vec<Code>, SessionStats)> {
        if self.used {
            return Err(Error::algorithm("lzw", "encoder session already used"));
        }
        self.used = true;

        let mut codes = Vec::with_capacity(input.len() / 2 + 1);
        let mut pos = 0;

        while pos < input.len() {
            let (code, len) = self.trie.longest_match(&input[pos..]).ok_or_else(|| {
                Error::algorithm(
                    "lzw",
                    format!("no dictionary entry for byte 0x{:02x}", input[pos]),
                )
            })?;
            codes.push(code);

            let end = pos + len;
            if end < input.len() {
                if let Some(next) = self.capacity.allocate() {
                    self.trie.insert(&input[pos..=end], next);
                    if !self.capacity.has_room() {
                        debug!(
                            max_bits = self.capacity.max_bits().get(),
                            position = end,
                            "dictionary full, freezing insertions"
                        );
                    }
                }
            }
            pos = end;
        }

        let stats = self.capacity.session_stats(codes.len());
        debug!(
            input_len = input.len(),
            codes = stats.codes,
            entries = stats.entries,
            "lzw encode finished"
        );
        Ok((codes, stats))
    }

    /// Dictionary index of this session, as grown by [`Encoder::encode`].
    pub fn dictionary(&self) -> &Trie {
        &self.trie
    }
}

/// Encode `input` at `max_bits` in a fresh session.
pub fn encode(input: &[u8], max_bits: u32) -> Result<Vec<Code>> {
    let max_bits = MaxBits::new(max_bits)?;
    Encoder::new(max_bits).encode(input).map(|(codes, _)| codes)
}
