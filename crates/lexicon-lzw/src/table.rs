//! Code-indexed dictionary used by the decoder.
//!
//! All entries share one contiguous byte buffer; each code maps to a span of
//! it, so lookup is a single index and appending an entry copies its prefix
//! once.

use crate::capacity::{Code, LITERAL_COUNT};

#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    len: usize,
}

/// Code → sequence table.
#[derive(Debug, Clone)]
pub struct CodeTable {
    bytes: Vec<u8>,
    spans: Vec<Span>,
}

impl CodeTable {
    /// Table holding the 256 single-byte literals.
    pub fn with_literals() -> Self {
        Self {
            bytes: (0..LITERAL_COUNT).map(|b| b as u8).collect(),
            spans: (0..LITERAL_COUNT)
                .map(|start| Span { start, len: 1 })
                .collect(),
        }
    }

    /// Number of entries. Also the code the next entry will get.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Whether the table is empty. A seeded table never is.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Sequence for `code`.
    pub fn get(&self, code: Code) -> Option<&[u8]> {
        let span = self.spans.get(usize::from(code))?;
        Some(&self.bytes[span.start..span.start + span.len])
    }

    /// Append `table[base]` followed by `byte` as a new entry.
    ///
    /// Returns the new code, or `None` if `base` has no entry.
    pub fn push_extended(&mut self, base: Code, byte: u8) -> Option<Code> {
        let span = *self.spans.get(usize::from(base))?;
        let start = self.bytes.len();
        self.bytes
            .extend_from_within(span.start..span.start + span.len);
        self.bytes.push(byte);
        self.spans.push(Span {
            start,
            len: span.len + 1,
        });
        Some((self.spans.len() - 1) as Code)
    }
}

impl Default for CodeTable {
    fn default() -> Self {
        Self::with_literals()
    }
}
