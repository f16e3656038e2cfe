//! # Lexicon LZW
//!
//! Adaptive dictionary compression (LZW) with a patricia-trie index.
//!
//! The encoder replaces repeated byte sequences with integer codes while it
//! grows a dictionary; the decoder rebuilds the same dictionary from the code
//! stream alone. Nothing but the codes (and the code width) crosses between
//! the two sides.
//!
//! ## Features
//!
//! - **Patricia trie**: longest-match lookup, edge splitting on insert,
//!   edge merging on delete
//! - **Bounded dictionary**: `2^max_bits` entries, `max_bits` in `9..=16`
//! - **Adaptive mode**: narrower widths or a stored fallback, recorded in a
//!   one-byte frame header
//!
//! ## Example
//!
//! ```
//! use lexicon_lzw::{decode, encode};
//!
//! let codes = encode(b"TOBEORNOTTOBEORTOBEORNOT", 12).unwrap();
//! assert!(codes.len() < 24);
//! assert_eq!(decode(&codes, 12).unwrap(), b"TOBEORNOTTOBEORTOBEORNOT");
//! ```
//!
//! With the codec traits:
//!
//! ```
//! use lexicon_core::{Compressor, Decompressor};
//! use lexicon_lzw::AdaptiveLzwCodec;
//!
//! let codec = AdaptiveLzwCodec::with_max_bits(16).unwrap();
//! let data = b"abcabcabcabcabcabcabcabcabcabcabcabcabcabc";
//! let framed = codec.compress(data).unwrap();
//! assert_eq!(codec.decompress(&framed).unwrap(), data);
//! ```

pub mod adaptive;
pub mod capacity;
pub mod codec;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod frame;
pub mod table;
pub mod trie;
pub mod wire;

pub use adaptive::{compress_adaptive, decompress_frame, AdaptiveOutput};
pub use capacity::{
    Capacity, Code, MaxBits, SessionStats, DEFAULT_MAX_BITS, LITERAL_COUNT, MAX_MAX_BITS,
    MIN_MAX_BITS,
};
pub use codec::{AdaptiveLzwCodec, LzwCodec};
pub use config::LzwConfig;
pub use decoder::{decode, Decoder};
pub use encoder::{encode, Encoder};
pub use frame::Frame;
pub use table::CodeTable;
pub use trie::Trie;
