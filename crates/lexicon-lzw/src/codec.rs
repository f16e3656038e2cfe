//! LZW codecs implementing the workspace traits.

use lexicon_core::{
    Algorithm, Codec, CompressionStats, Compressor, Decompressor, Result,
};

use crate::adaptive::{compress_adaptive, decompress_frame};
use crate::capacity::{MaxBits, SessionStats};
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::frame::HEADER_LEN;
use crate::wire::{self, CODE_BYTES};

fn attach_session(stats: CompressionStats, session: Option<SessionStats>) -> CompressionStats {
    match session {
        Some(s) => stats.with_dictionary(s.max_bits.get(), s.codes, s.entries),
        None => stats,
    }
}

/// Fixed-width LZW codec.
///
/// Output is a bare code stream; the decompressing side must be configured
/// with the same width.
#[derive(Debug, Clone, Copy, Default)]
pub struct LzwCodec {
    max_bits: MaxBits,
}

impl LzwCodec {
    /// Codec at the default width.
    pub fn new() -> Self {
        Self::default()
    }

    /// Codec at a validated width.
    pub fn with_max_bits(max_bits: u32) -> Result<Self> {
        Ok(Self {
            max_bits: MaxBits::new(max_bits)?,
        })
    }

    /// Configured width.
    pub fn max_bits(&self) -> MaxBits {
        self.max_bits
    }

    fn compress_session(&self, input: &[u8]) -> Result<(Vec<u8>, SessionStats)> {
        let (codes, session) = Encoder::new(self.max_bits).encode(input)?;
        Ok((wire::codes_to_bytes(&codes), session))
    }

    fn decompress_session(&self, input: &[u8]) -> Result<(Vec<u8>, SessionStats)> {
        let codes = wire::bytes_to_codes(input)?;
        let mut decoder = Decoder::new(self.max_bits);
        for &code in &codes {
            decoder.push(code)?;
        }
        Ok(decoder.finish())
    }
}

impl Compressor for LzwCodec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Lzw
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.compress_session(input).map(|(out, _)| out)
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        // at worst one code per byte
        input_len * CODE_BYTES
    }

    fn compress_with_stats(&self, input: &[u8]) -> Result<(Vec<u8>, CompressionStats)> {
        let start = std::time::Instant::now();
        let (out, session) = self.compress_session(input)?;
        let stats = CompressionStats::from_operation(
            Algorithm::Lzw,
            input.len(),
            out.len(),
            start.elapsed().as_micros() as u64,
        );
        Ok((out, attach_session(stats, Some(session))))
    }
}

impl Decompressor for LzwCodec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Lzw
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.decompress_session(input).map(|(out, _)| out)
    }

    fn decompress_with_stats(&self, input: &[u8]) -> Result<(Vec<u8>, CompressionStats)> {
        let start = std::time::Instant::now();
        let (out, session) = self.decompress_session(input)?;
        let stats = CompressionStats::from_operation(
            Algorithm::Lzw,
            out.len(),
            input.len(),
            start.elapsed().as_micros() as u64,
        );
        Ok((out, attach_session(stats, Some(session))))
    }
}

impl Codec for LzwCodec {}

/// LZW codec with width search and framed output.
///
/// `max_bits` is only the starting width; decompression reads the width
/// from the frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdaptiveLzwCodec {
    max_bits: MaxBits,
}

impl AdaptiveLzwCodec {
    /// Codec starting its search at the default width.
    pub fn new() -> Self {
        Self::default()
    }

    /// Codec starting its search at a validated width.
    pub fn with_max_bits(max_bits: u32) -> Result<Self> {
        Ok(Self {
            max_bits: MaxBits::new(max_bits)?,
        })
    }

    /// Starting width of the search.
    pub fn max_bits(&self) -> MaxBits {
        self.max_bits
    }
}

impl Compressor for AdaptiveLzwCodec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AdaptiveLzw
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        compress_adaptive(input, self.max_bits).map(|out| out.frame)
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        // stored fallback bounds the output
        input_len + HEADER_LEN
    }

    fn compress_with_stats(&self, input: &[u8]) -> Result<(Vec<u8>, CompressionStats)> {
        let start = std::time::Instant::now();
        let out = compress_adaptive(input, self.max_bits)?;
        let algorithm = match out.session {
            Some(_) => Algorithm::AdaptiveLzw,
            None => Algorithm::Stored,
        };
        let stats = CompressionStats::from_operation(
            algorithm,
            input.len(),
            out.frame.len(),
            start.elapsed().as_micros() as u64,
        );
        Ok((out.frame, attach_session(stats, out.session)))
    }
}

impl Decompressor for AdaptiveLzwCodec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AdaptiveLzw
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        decompress_frame(input).map(|(out, _)| out)
    }

    fn decompress_with_stats(&self, input: &[u8]) -> Result<(Vec<u8>, CompressionStats)> {
        let start = std::time::Instant::now();
        let (out, session) = decompress_frame(input)?;
        let algorithm = match session {
            Some(_) => Algorithm::AdaptiveLzw,
            None => Algorithm::Stored,
        };
        let stats = CompressionStats::from_operation(
            algorithm,
            out.len(),
            input.len(),
            start.elapsed().as_micros() as u64,
        );
        Ok((out, attach_session(stats, session)))
    }
}

impl Codec for AdaptiveLzwCodec {}

#[cfg(test)]
mod tests {
    use super::*;
    use lexicon_core::Error;

    #[test]
    fn test_roundtrip_empty() {
        let codec = LzwCodec::new();
        let compressed = codec.compress(b"").unwrap();
        assert!(compressed.is_empty());
        assert!(codec.decompress(&compressed).unwrap().is_empty());
    }

    #[test]
    fn test_roundtrip_small() {
        let codec = LzwCodec::with_max_bits(12).unwrap();
        let input = b"Hello, LZW!";
        let compressed = codec.compress(input).unwrap();
        assert_eq!(codec.decompress(&compressed).unwrap().as_slice(), input);
    }

    #[test]
    fn test_roundtrip_repetitive() {
        let codec = LzwCodec::with_max_bits(12).unwrap();
        let input = b"ABCABCABCABCABCABCABCABCABCABCABCABCABCABC";

        let compressed = codec.compress(input).unwrap();
        assert!(compressed.len() < input.len());
        assert!(compressed.len() <= codec.max_compressed_size(input.len()));
        assert!(codec.verify_roundtrip(input).unwrap());
    }

    #[test]
    fn test_roundtrip_large() {
        let codec = LzwCodec::with_max_bits(16).unwrap();
        let pattern = b"The quick brown fox jumps over the lazy dog. ";
        let input: Vec<u8> = pattern.iter().cycle().take(100_000).copied().collect();

        let compressed = codec.compress(&input).unwrap();
        assert!(compressed.len() < input.len() / 4);
        assert_eq!(codec.decompress(&compressed).unwrap(), input);
    }

    #[test]
    fn test_every_width() {
        let input: Vec<u8> = (0..30_000u32).map(|i| ((i % 251) ^ (i / 97)) as u8).collect();
        for bits in 9..=16 {
            let codec = LzwCodec::with_max_bits(bits).unwrap();
            assert!(codec.verify_roundtrip(&input).unwrap(), "width {}", bits);
        }
    }

    #[test]
    fn test_invalid_width() {
        assert!(matches!(
            LzwCodec::with_max_bits(24),
            Err(Error::InvalidConfig { max_bits: 24, .. })
        ));
        assert!(AdaptiveLzwCodec::with_max_bits(4).is_err());
    }

    #[test]
    fn test_compress_to_buffer() {
        let codec = LzwCodec::new();
        let input = b"TOBEORNOTTOBEORTOBEORNOT";

        let mut small = [0u8; 4];
        assert!(matches!(
            codec.compress_to(input, &mut small),
            Err(Error::BufferTooSmall { required: 32, provided: 4 })
        ));

        let mut buffer = vec![0u8; codec.max_compressed_size(input.len())];
        let written = codec.compress_to(input, &mut buffer).unwrap();
        assert_eq!(written, 32);

        let mut restored = [0u8; 24];
        let len = codec.decompress_to(&buffer[..written], &mut restored).unwrap();
        assert_eq!(&restored[..len], input);
    }

    #[test]
    fn test_stats_carry_dictionary() {
        let codec = LzwCodec::with_max_bits(12).unwrap();
        let (out, stats) = codec.compress_with_stats(b"TOBEORNOTTOBEORTOBEORNOT").unwrap();
        assert_eq!(stats.compressed_size, out.len());
        assert_eq!(stats.code_width, Some(12));
        assert_eq!(stats.codes, Some(16));
        assert_eq!(stats.dictionary_entries, Some(271));

        let (_, stats) = codec.decompress_with_stats(&out).unwrap();
        assert_eq!(stats.original_size, 24);
        assert_eq!(stats.codes, Some(16));
    }

    #[test]
    fn test_width_mismatch_is_not_silent() {
        // Decoding a 16-bit stream at 9 bits cannot resync once codes exceed 511.
        let input: Vec<u8> = b"abcdefghij".iter().cycle().take(50_000).copied().collect();
        let compressed = LzwCodec::with_max_bits(16).unwrap().compress(&input).unwrap();
        let narrow = LzwCodec::with_max_bits(9).unwrap();
        assert!(narrow.decompress(&compressed).is_err());
    }

    #[test]
    fn test_adaptive_bounded_output() {
        let codec = AdaptiveLzwCodec::with_max_bits(16).unwrap();
        let noise: Vec<u8> = (0..=255u8).collect();

        let (out, stats) = codec.compress_with_stats(&noise).unwrap();
        assert_eq!(stats.algorithm, Some(Algorithm::Stored));
        assert!(out.len() <= codec.max_compressed_size(noise.len()));
        assert_eq!(codec.decompress(&out).unwrap(), noise);
    }

    #[test]
    fn test_adaptive_roundtrip_and_ratio() {
        let codec = AdaptiveLzwCodec::new();
        let input: Vec<u8> = b"TOBEORNOT".iter().cycle().take(10_000).copied().collect();

        let ratio = codec.measure_ratio(&input).unwrap();
        assert!(ratio.is_effective());
        assert!(codec.verify_roundtrip(&input).unwrap());

        let (_, stats) = codec.compress_with_stats(&input).unwrap();
        assert_eq!(stats.algorithm, Some(Algorithm::AdaptiveLzw));
        assert_eq!(stats.code_width, Some(12));
    }
}
