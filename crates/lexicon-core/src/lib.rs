//! # Lexicon Core
//!
//! Core traits, error taxonomy and statistics shared by the Lexicon
//! dictionary codecs.
//!
//! ## Design Philosophy
//!
//! - **Session-scoped state**: every call builds and drops its own dictionary
//! - **Pure functions**: output depends only on input and configuration
//! - **All-or-nothing**: a failing call never yields partial output
//!
//! ## Core Traits
//!
//! - [`Compressor`] - One-shot compression operations
//! - [`Decompressor`] - One-shot decompression operations
//! - [`Codec`] - Combined compress/decompress capability
//!
//! ## Example
//!
//! ```ignore
//! use lexicon_core::{Codec, Compressor, Decompressor};
//! use lexicon_lzw::LzwCodec;
//!
//! let codec = LzwCodec::with_max_bits(12)?;
//! let compressed = codec.compress(data)?;
//! let original = codec.decompress(&compressed)?;
//! ```

pub mod error;
pub mod stats;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use stats::CompressionStats;
pub use traits::{Codec, Compressor, Decompressor};
pub use types::{Algorithm, CompressionRatio};
