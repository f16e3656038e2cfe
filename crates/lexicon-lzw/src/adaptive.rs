//! Width search on top of the fixed-width codec.
//!
//! Starting from the configured width, the input is re-encoded one bit
//! narrower each time the code payload fails to come out smaller than the
//! input. Narrower widths freeze the dictionary earlier but that only costs
//! ratio, never correctness. If no width helps, the input is stored verbatim.
//! The chosen width travels in the frame header, so the decoder needs no
//! out-of-band configuration.

use lexicon_core::{CompressionRatio, Result};
use tracing::{debug, info};

use crate::capacity::{MaxBits, SessionStats};
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::frame::{self, Frame};
use crate::wire;

/// Result of an adaptive compression.
#[derive(Debug, Clone)]
pub struct AdaptiveOutput {
    /// Framed output.
    pub frame: Vec<u8>,
    /// Session of the width that was kept, `None` for a stored frame.
    pub session: Option<SessionStats>,
}

/// Compress `input`, trying widths from `max_bits` downwards.
pub fn compress_adaptive(input: &[u8], max_bits: MaxBits) -> Result<AdaptiveOutput> {
    let mut width = max_bits;
    loop {
        let (codes, session) = Encoder::new(width).encode(input)?;
        let payload_len = codes.len() * wire::CODE_BYTES;

        if CompressionRatio::new(input.len(), payload_len).is_effective() {
            debug!(
                max_bits = width.get(),
                input_len = input.len(),
                payload_len,
                "code width accepted"
            );
            return Ok(AdaptiveOutput {
                frame: frame::write_lzw(width, &codes),
                session: Some(session),
            });
        }

        debug!(
            max_bits = width.get(),
            input_len = input.len(),
            payload_len,
            "code width does not shrink input"
        );
        match width.narrower() {
            Some(next) => width = next,
            None => break,
        }
    }

    info!(
        input_len = input.len(),
        "no code width shrinks input, storing verbatim"
    );
    Ok(AdaptiveOutput {
        frame: frame::write_stored(input),
        session: None,
    })
}

/// Decompress a frame produced by [`compress_adaptive`].
pub fn decompress_frame(input: &[u8]) -> Result<(Vec<u8>, Option<SessionStats>)> {
    match Frame::parse(input)? {
        Frame::Stored(payload) => Ok((payload.to_vec(), None)),
        Frame::Lzw { max_bits, payload } => {
            let codes = wire::bytes_to_codes(payload)?;
            let mut decoder = Decoder::new(max_bits);
            for &code in &codes {
                decoder.push(code)?;
            }
            let (output, session) = decoder.finish();
            Ok((output, Some(session)))
        }
    }
}
