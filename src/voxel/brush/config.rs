//! Vine brush configuration

use std::fmt;
use std::fs;
use std::num::NonZeroU32;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::voxel::block::{BlockKind, BlockSpec};
use super::random::RandomSource;

/// Default brush radius in blocks
pub const DEFAULT_BRUSH_SIZE: i32 = 6;
/// Default density in percent
pub const DEFAULT_DENSITY_PERCENT: f64 = 20.0;
/// Default maximum strand length in blocks
pub const DEFAULT_MAX_LENGTH: u32 = 12;
/// Default fill material
pub const DEFAULT_MATERIAL: &str = "vine";

const DEFAULT_RADIUS: NonZeroU32 = NonZeroU32::new(DEFAULT_BRUSH_SIZE as u32).unwrap();
const DEFAULT_LENGTH: NonZeroU32 = NonZeroU32::new(DEFAULT_MAX_LENGTH).unwrap();

/// What a strand is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMaterial {
    /// Pick a face-attached vine variant per strand from the eligible anchors
    AutoVine,
    /// Always place this block
    Specific(BlockSpec),
}

impl FillMaterial {
    /// Parse a material string. Any vine, with or without face properties,
    /// selects [`FillMaterial::AutoVine`].
    pub fn parse(input: &str) -> Result<Self> {
        let block = BlockSpec::parse(input)?;
        if block.is_vine() {
            Ok(FillMaterial::AutoVine)
        } else {
            Ok(FillMaterial::Specific(block))
        }
    }

    /// Material kind anchors must differ from
    pub fn kind(&self) -> BlockKind {
        match self {
            FillMaterial::AutoVine => BlockKind::VINE,
            FillMaterial::Specific(block) => block.kind,
        }
    }

    /// Block to place for one strand. `candidates` holds the vine variants of
    /// the eligible anchors and must be non-empty for `AutoVine`.
    pub fn resolve<R: RandomSource + ?Sized>(&self, candidates: &[BlockSpec], rng: &mut R) -> BlockSpec {
        match self {
            FillMaterial::AutoVine => {
                let index = rng.uniform_int(candidates.len() as u32) as usize;
                candidates[index]
            }
            FillMaterial::Specific(block) => *block,
        }
    }
}

impl fmt::Display for FillMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillMaterial::AutoVine => f.write_str(BlockKind::VINE.name()),
            FillMaterial::Specific(block) => write!(f, "{}", block),
        }
    }
}

/// Resolved parameters of one bound vine brush.
///
/// `Display` gives the status line, naming only the fill's material kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthConfig {
    /// Radius on every axis
    pub brush_size: NonZeroU32,
    /// Fraction of visited cells that try to grow, nominally in `[0, 1]`
    pub density: f64,
    /// Exclusive upper bound of the sampled strand length
    pub max_length: NonZeroU32,
    pub fill: FillMaterial,
}

impl GrowthConfig {
    pub fn new(brush_size: NonZeroU32, density: f64, max_length: NonZeroU32, fill: FillMaterial) -> Self {
        Self { brush_size, density, max_length, fill }
    }
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_RADIUS,
            DEFAULT_DENSITY_PERCENT / 100.0,
            DEFAULT_LENGTH,
            FillMaterial::AutoVine,
        )
    }
}

impl fmt::Display for GrowthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Size: {} - Density: {}% - Length: {} - Material: {}",
            self.brush_size,
            (self.density * 100.0).round(),
            self.max_length,
            self.fill.kind().name()
        )
    }
}

/// User-facing brush options, as stored in settings files
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushSettings {
    /// Brush radius in blocks; values <= 0 fall back to the default
    pub size: i32,
    /// Percent of cells that try to grow (0-100)
    pub density_percent: f64,
    /// Maximum strand length
    pub max_length: u32,
    /// Block string such as `vine` or `oak_leaves[persistent=true]`
    pub material: String,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_BRUSH_SIZE,
            density_percent: DEFAULT_DENSITY_PERCENT,
            max_length: DEFAULT_MAX_LENGTH,
            material: DEFAULT_MATERIAL.to_string(),
        }
    }
}

impl BrushSettings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Turn settings into a growth config.
    ///
    /// Density is not range-checked. A zero max length is rejected since
    /// strand lengths are sampled below it.
    pub fn resolve(&self) -> Result<GrowthConfig> {
        let brush_size = match u32::try_from(self.size).ok().and_then(NonZeroU32::new) {
            Some(size) => size,
            None => {
                debug!("Brush size {} replaced with {}", self.size, DEFAULT_BRUSH_SIZE);
                DEFAULT_RADIUS
            }
        };
        let max_length = NonZeroU32::new(self.max_length)
            .ok_or_else(|| Error::InvalidSetting("max_length must be at least 1".to_string()))?;
        let fill = FillMaterial::parse(&self.material)?;

        Ok(GrowthConfig::new(brush_size, self.density_percent / 100.0, max_length, fill))
    }
}
