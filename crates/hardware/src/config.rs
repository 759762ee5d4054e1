//! Configuration system for the E20 simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Cache Geometry:** `CacheConfig` (size, associativity, blocksize in words)
//!    and its validation.
//! 2. **Hierarchy:** `CacheHierarchyConfig`, parsed from the command-line
//!    string `size,assoc,blocksize[,size,assoc,blocksize]`.
//! 3. **Run Options:** `Config`, which adds the load-hit policy and an optional
//!    instruction cap, and can be deserialized from JSON.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::constants::MEM_SIZE;
use crate::common::{CacheLevel, ConfigError, GeometryError};

/// Number of values describing one cache in the configuration string.
const VALUES_PER_CACHE: usize = 3;

/// Geometry of a single cache, in words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Total capacity in words, excluding metadata.
    pub size: usize,
    /// Blocks per row.
    pub associativity: usize,
    /// Words per block.
    #[serde(alias = "blocksize")]
    pub block_size: usize,
}

impl CacheConfig {
    /// Creates a cache geometry without validating it.
    pub const fn new(size: usize, associativity: usize, block_size: usize) -> Self {
        Self {
            size,
            associativity,
            block_size,
        }
    }

    /// Returns `size / (associativity * block_size)`.
    ///
    /// Only meaningful once [`CacheConfig::validate`] has succeeded.
    pub const fn num_rows(&self) -> usize {
        self.size / (self.associativity * self.block_size)
    }

    /// Checks that the geometry describes a whole number of non-empty rows.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Geometry`] tagged with `level` if a parameter is
    /// zero, the size exceeds main memory, or the size does not divide evenly
    /// into rows.
    pub fn validate(&self, level: CacheLevel) -> Result<(), ConfigError> {
        let source = if self.size == 0 {
            GeometryError::Zero("size")
        } else if self.associativity == 0 {
            GeometryError::Zero("associativity")
        } else if self.block_size == 0 {
            GeometryError::Zero("blocksize")
        } else if self.size > MEM_SIZE {
            GeometryError::TooLarge { size: self.size }
        } else {
            match self.associativity.checked_mul(self.block_size) {
                Some(row_words) if self.size % row_words == 0 => return Ok(()),
                _ => GeometryError::NonDividing {
                    size: self.size,
                    associativity: self.associativity,
                    block_size: self.block_size,
                },
            }
        };
        Err(ConfigError::Geometry { level, source })
    }
}

impl fmt::Display for CacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.size, self.associativity, self.block_size)
    }
}

/// L1 geometry plus optional L2 geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheHierarchyConfig {
    /// First-level cache.
    pub l1: CacheConfig,
    /// Second-level cache, if any.
    #[serde(default)]
    pub l2: Option<CacheConfig>,
}

impl CacheHierarchyConfig {
    /// Validates every configured level.
    ///
    /// # Errors
    ///
    /// Returns the first level's [`ConfigError::Geometry`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.l1.validate(CacheLevel::L1)?;
        if let Some(l2) = &self.l2 {
            l2.validate(CacheLevel::L2)?;
        }
        Ok(())
    }
}

impl FromStr for CacheHierarchyConfig {
    type Err = ConfigError;

    /// Parses `size,assoc,blocksize` or `size,assoc,blocksize,size,assoc,blocksize`.
    ///
    /// The part count is checked before any value is parsed. Geometry is
    /// validated as well, so a parsed configuration can always build caches.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != VALUES_PER_CACHE && parts.len() != 2 * VALUES_PER_CACHE {
            return Err(ConfigError::InvalidPartCount(parts.len()));
        }

        let values = parts
            .iter()
            .map(|part| {
                part.parse::<usize>()
                    .map_err(|_| ConfigError::InvalidNumber((*part).to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let cache = |chunk: &[usize]| CacheConfig::new(chunk[0], chunk[1], chunk[2]);
        let mut levels = values.chunks_exact(VALUES_PER_CACHE).map(cache);
        let config = Self {
            l1: levels
                .next()
                .ok_or(ConfigError::InvalidPartCount(parts.len()))?,
            l2: levels.next(),
        };
        config.validate()?;
        Ok(config)
    }
}

/// What a load-word does to its destination register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPolicy {
    /// Read memory into the register only when the load missed at every
    /// consulted level. A hit leaves the register unchanged.
    #[default]
    MissOnly,
    /// Read memory into the register on every load.
    AlwaysRead,
}

/// Run configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Cache hierarchy; `None` runs without cache simulation.
    #[serde(default)]
    pub cache: Option<CacheHierarchyConfig>,
    /// Load-hit policy.
    #[serde(default)]
    pub load_policy: LoadPolicy,
    /// Maximum number of instructions to execute before giving up.
    #[serde(default)]
    pub max_steps: Option<u64>,
}

impl Config {
    /// Deserializes and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON and
    /// [`ConfigError::Geometry`] for an unusable cache.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if let Some(cache) = &config.cache {
            cache.validate()?;
        }
        Ok(config)
    }

    /// Reads a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file can't be read, otherwise as
    /// [`Config::from_json`].
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
