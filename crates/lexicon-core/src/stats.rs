//! Statistics for compression operations.

use serde::{Deserialize, Serialize};

use crate::types::{Algorithm, CompressionRatio};

/// Statistics from a compression/decompression operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompressionStats {
    /// Algorithm used.
    pub algorithm: Option<Algorithm>,

    /// Original (uncompressed) size in bytes.
    pub original_size: usize,

    /// Compressed size in bytes.
    pub compressed_size: usize,

    /// Time taken in microseconds.
    pub time_us: u64,

    /// Code width the session ran with, if a dictionary was built.
    pub code_width: Option<u32>,

    /// Number of codes in the compressed stream.
    pub codes: Option<usize>,

    /// Live dictionary entries at the end of the session.
    pub dictionary_entries: Option<usize>,
}

impl CompressionStats {
    /// Create stats from a completed operation.
    pub fn from_operation(
        algorithm: Algorithm,
        original_size: usize,
        compressed_size: usize,
        time_us: u64,
    ) -> Self {
        CompressionStats {
            algorithm: Some(algorithm),
            original_size,
            compressed_size,
            time_us,
            ..Default::default()
        }
    }

    /// Attach dictionary details of the session.
    pub fn with_dictionary(mut self, code_width: u32, codes: usize, entries: usize) -> Self {
        self.code_width = Some(code_width);
        self.codes = Some(codes);
        self.dictionary_entries = Some(entries);
        self
    }

    /// Get compression ratio.
    pub fn ratio(&self) -> CompressionRatio {
        CompressionRatio::new(self.original_size, self.compressed_size)
    }

    /// Get throughput in MB/s over the uncompressed size.
    pub fn throughput_mbs(&self) -> f64 {
        if self.time_us == 0 {
            return 0.0;
        }
        self.original_size as f64 / self.time_us as f64
    }

    /// Get space savings as percentage.
    pub fn savings_percent(&self) -> f64 {
        self.ratio().savings_percent()
    }

    /// One-line human readable summary.
    pub fn summary(&self) -> String {
        let algorithm = self.algorithm.map(Algorithm::name).unwrap_or("unknown");
        let mut line = format!(
            "{}: {} -> {} bytes (ratio: {:.4}x, savings: {:.1}%), {:.4}s, {:.1} MB/s",
            algorithm,
            self.original_size,
            self.compressed_size,
            self.ratio().ratio(),
            self.savings_percent(),
            self.time_us as f64 / 1_000_000.0,
            self.throughput_mbs(),
        );
        if let Some(width) = self.code_width {
            line.push_str(&format!(", width: {} bits", width));
        }
        line
    }
}
