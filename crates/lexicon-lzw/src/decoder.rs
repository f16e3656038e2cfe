//! LZW decoder.
//!
//! The decoder rebuilds the encoder's dictionary one step behind it: after
//! each code (except the first) it registers the previous entry extended by
//! the first byte of the current one, which is exactly the entry the encoder
//! created when it emitted the previous code.
//!
//! Being one step behind means the encoder may reference an entry the decoder
//! has not created yet. That only happens for the very next code, whose
//! sequence is then the previous entry followed by its own first byte.
//!
//! ```text
//!          first code            every further code
//!   Init ──────────────▶ Emitting ◀────────────────┐
//!                             └────────────────────┘
//! ```

use lexicon_core::{Error, Result};
use tracing::debug;

use crate::capacity::{Capacity, Code, MaxBits, SessionStats, LITERAL_COUNT};
use crate::table::CodeTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Init,
    Emitting { prev: Code },
}

/// One decoding session.
#[derive(Debug, Clone)]
pub struct Decoder {
    table: CodeTable,
    capacity: Capacity,
    state: State,
    output: Vec<u8>,
    consumed: usize,
}

impl Decoder {
    /// Fresh session at the given width.
    pub fn new(max_bits: MaxBits) -> Self {
        Self {
            table: CodeTable::with_literals(),
            capacity: Capacity::new(max_bits),
            state: State::Init,
            output: Vec::new(),
            consumed: 0,
        }
    }

    /// Code table of this session, as rebuilt from the codes pushed so far.
    pub fn dictionary(&self) -> &CodeTable {
        &self.table
    }

    /// Feed the next code of the stream.
    pub fn push(&mut self, code: Code) -> Result<()> {
        let index = self.consumed;

        match self.state {
            State::Init => {
                if usize::from(code) >= LITERAL_COUNT {
                    return Err(Error::corrupted_at(
                        format!("first code {} is not a literal", code),
                        index,
                    ));
                }
                self.output.push(code as u8);
            }
            State::Emitting { prev } => {
                let prev_len = self
                    .table
                    .get(prev)
                    .map(<[u8]>::len)
                    .ok_or_else(|| Error::algorithm("lzw", "previous code missing from table"))?;
                let start = self.output.len();

                if let Some(entry) = self.table.get(code) {
                    self.output.extend_from_slice(entry);
                } else if usize::from(code) == self.table.len() && self.capacity.has_room() {
                    // previous entry followed by its own first byte
                    let prev_start = start - prev_len;
                    self.output.extend_from_within(prev_start..start);
                    self.output.push(self.output[prev_start]);
                } else {
                    return Err(Error::corrupted_at(
                        format!(
                            "code {} not in table (next assignable is {})",
                            code,
                            self.table.len()
                        ),
                        index,
                    ));
                }

                if self.capacity.allocate().is_some() {
                    let first = self.output[start];
                    self.table
                        .push_extended(prev, first)
                        .ok_or_else(|| Error::algorithm("lzw", "table out of step"))?;
                    if !self.capacity.has_room() {
                        debug!(
                            max_bits = self.capacity.max_bits().get(),
                            position = index,
                            "dictionary full, freezing insertions"
                        );
                    }
                }
            }
        }

        self.state = State::Emitting { prev: code };
        self.consumed += 1;
        Ok(())
    }

    /// End the session and take the decoded bytes.
    pub fn finish(self) -> (Vec<u8>, SessionStats) {
        let stats = self.capacity.session_stats(self.consumed);
        debug!(
            codes = stats.codes,
            output_len = self.output.len(),
            entries = stats.entries,
            "lzw decode finished"
        );
        (self.output, stats)
    }
}

/// Decode `codes` produced at `max_bits` in a fresh session.
pub fn decode(codes: &[Code], max_bits: u32) -> Result<Vec<u8>> {
    let max_bits = MaxBits::new(max_bits)?;
    let mut decoder = Decoder::new(max_bits);
    for &code in codes {
        decoder.push(code)?;
    }
    Ok(decoder.finish().0)
}
