//! Codec configuration.

use std::path::Path;

use lexicon_core::{Codec, Error, Result};
use serde::{Deserialize, Serialize};

use crate::capacity::{MaxBits, DEFAULT_MAX_BITS};
use crate::codec::{AdaptiveLzwCodec, LzwCodec};

/// LZW codec configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LzwConfig {
    /// Code width; dictionary capacity is `2^max_bits`.
    #[serde(default = "default_max_bits")]
    pub max_bits: u32,

    /// Search narrower widths and frame the output.
    #[serde(default = "default_adaptive")]
    pub adaptive: bool,
}

impl Default for LzwConfig {
    fn default() -> Self {
        Self {
            max_bits: default_max_bits(),
            adaptive: default_adaptive(),
        }
    }
}

impl LzwConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Override the width.
    pub fn with_max_bits(mut self, max_bits: u32) -> Self {
        self.max_bits = max_bits;
        self
    }

    /// Override the mode.
    pub fn with_adaptive(mut self, adaptive: bool) -> Self {
        self.adaptive = adaptive;
        self
    }

    /// Check the width against the wire format.
    pub fn validate(&self) -> Result<MaxBits> {
        MaxBits::new(self.max_bits)
    }

    /// Build the configured codec.
    pub fn build_codec(&self) -> Result<Box<dyn Codec + Send + Sync>> {
        self.validate()?;
        if self.adaptive {
            Ok(Box::new(AdaptiveLzwCodec::with_max_bits(self.max_bits)?))
        } else {
            Ok(Box::new(LzwCodec::with_max_bits(self.max_bits)?))
        }
    }
}

fn default_max_bits() -> u32 {
    DEFAULT_MAX_BITS
}

fn default_adaptive() -> bool {
    true
}
