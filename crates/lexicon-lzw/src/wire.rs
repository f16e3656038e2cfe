//! Fixed-width wire format: every code is a 2-byte big-endian integer.

use lexicon_core::{Error, Result};

use crate::capacity::Code;

/// Bytes per serialized code.
pub const CODE_BYTES: usize = 2;

/// Append the serialized `codes` to `out`.
pub fn write_codes(codes: &[Code], out: &mut Vec<u8>) {
    out.reserve(codes.len() * CODE_BYTES);
    for &code in codes {
        out.extend_from_slice(&code.to_be_bytes());
    }
}

/// Serialize `codes` into a new buffer.
pub fn codes_to_bytes(codes: &[Code]) -> Vec<u8> {
    let mut out = Vec::with_capacity(codes.len() * CODE_BYTES);
    write_codes(codes, &mut out);
    out
}

/// Parse a serialized code stream.
///
/// A trailing odd byte is a truncated code.
pub fn bytes_to_codes(bytes: &[u8]) -> Result<Vec<Code>> {
    let chunks = bytes.chunks_exact(CODE_BYTES);
    if !chunks.remainder().is_empty() {
        return Err(Error::unexpected_eof(bytes.len()));
    }
    Ok(chunks
        .map(|pair| Code::from_be_bytes([pair[0], pair[1]]))
        .collect())
}
