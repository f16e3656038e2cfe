//! Self-describing frame for the adaptive codec.
//!
//! ```text
//! ┌────────────┬──────────────────────────────────────────┐
//! │ header (1) │ payload                                  │
//! ├────────────┼──────────────────────────────────────────┤
//! │ 0x00       │ original bytes, verbatim                 │
//! │ 9..=16     │ 2-byte big-endian codes at that width    │
//! └────────────┴──────────────────────────────────────────┘
//! ```

use lexicon_core::{Error, Result};

use crate::capacity::{Code, MaxBits};
use crate::wire;

/// Header byte of a stored frame.
pub const STORED_MARKER: u8 = 0x00;

/// Header length in bytes.
pub const HEADER_LEN: usize = 1;

/// A parsed frame borrowing its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame<'a> {
    /// Payload is the original data.
    Stored(&'a [u8]),
    /// Payload is a code stream at `max_bits`.
    Lzw { max_bits: MaxBits, payload: &'a [u8] },
}

impl<'a> Frame<'a> {
    /// Split a frame into header and payload.
    pub fn parse(input: &'a [u8]) -> Result<Self> {
        let (&header, payload) = input
            .split_first()
            .ok_or_else(|| Error::unexpected_eof(0))?;
        if header == STORED_MARKER {
            return Ok(Frame::Stored(payload));
        }
        let max_bits = MaxBits::new(u32::from(header)).map_err(|_| {
            Error::corrupted_at(format!("invalid frame header 0x{:02x}", header), 0)
        })?;
        Ok(Frame::Lzw { max_bits, payload })
    }
}

/// Build a stored frame.
pub fn write_stored(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + input.len());
    out.push(STORED_MARKER);
    out.extend_from_slice(input);
    out
}

/// Build an LZW frame.
pub fn write_lzw(max_bits: MaxBits, codes: &[Code]) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + codes.len() * wire::CODE_BYTES);
    out.push(max_bits.get() as u8);
    wire::write_codes(codes, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stored() {
        let framed = write_stored(b"raw");
        let frame = Frame::parse(&framed).unwrap();
        assert_eq!(frame, Frame::Stored(b"raw"));
        assert_eq!(framed[0], STORED_MARKER);
    }

    #[test]
    fn test_parse_lzw() {
        let bits = MaxBits::new(12).unwrap();
        let framed = write_lzw(bits, &[97, 256]);
        assert_eq!(framed, vec![12, 0x00, 0x61, 0x01, 0x00]);

        match Frame::parse(&framed).unwrap() {
            Frame::Lzw { max_bits, payload } => {
                assert_eq!(max_bits, bits);
                assert_eq!(payload, &[0x00, 0x61, 0x01, 0x00]);
            }
            other => panic!("unexpected frame {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_bad_header() {
        for header in [1u8, 8, 17, 0xff] {
            let err = Frame::parse(&[header, 0, 0]).unwrap_err();
            assert!(err.is_corrupt_stream(), "header {} accepted", header);
        }
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(
            Frame::parse(&[]),
            Err(Error::UnexpectedEof { bytes_read: 0 })
        ));
    }
}
