//! Block materials and block states

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

/// Block state flags
pub mod state {
    pub const NORTH: u8 = 1 << 0;
    pub const SOUTH: u8 = 1 << 1;
    pub const EAST: u8 = 1 << 2;
    pub const WEST: u8 = 1 << 3;
    pub const PERSISTENT: u8 = 1 << 4;
}

/// Optional namespace accepted in front of material names
const NAMESPACE: &str = "minecraft:";

const NO_PROPERTIES: &[(&str, u8)] = &[];

const FACE_PROPERTIES: &[(&str, u8)] = &[
    ("north", state::NORTH),
    ("south", state::SOUTH),
    ("east", state::EAST),
    ("west", state::WEST),
];

const LEAF_PROPERTIES: &[(&str, u8)] = &[("persistent", state::PERSISTENT)];

/// Static description of a material
#[derive(Debug)]
pub struct MaterialInfo {
    pub name: &'static str,
    /// Blocks movement
    pub solid: bool,
    /// Occupies the whole cell
    pub full_cube: bool,
    /// Boolean state properties this material accepts
    pub properties: &'static [(&'static str, u8)],
}

impl MaterialInfo {
    const fn new(
        name: &'static str,
        solid: bool,
        full_cube: bool,
        properties: &'static [(&'static str, u8)],
    ) -> Self {
        Self { name, solid, full_cube, properties }
    }
}

/// Indexed by `BlockKind`
static MATERIALS: [MaterialInfo; 14] = [
    MaterialInfo::new("air", false, false, NO_PROPERTIES),
    MaterialInfo::new("stone", true, true, NO_PROPERTIES),
    MaterialInfo::new("dirt", true, true, NO_PROPERTIES),
    MaterialInfo::new("grass_block", true, true, NO_PROPERTIES),
    MaterialInfo::new("cobblestone", true, true, NO_PROPERTIES),
    MaterialInfo::new("oak_log", true, true, NO_PROPERTIES),
    MaterialInfo::new("oak_planks", true, true, NO_PROPERTIES),
    MaterialInfo::new("oak_leaves", true, true, LEAF_PROPERTIES),
    MaterialInfo::new("glass", true, true, NO_PROPERTIES),
    MaterialInfo::new("vine", false, false, FACE_PROPERTIES),
    MaterialInfo::new("water", false, false, NO_PROPERTIES),
    MaterialInfo::new("oak_fence", true, false, NO_PROPERTIES),
    MaterialInfo::new("oak_slab", true, false, NO_PROPERTIES),
    MaterialInfo::new("torch", false, false, NO_PROPERTIES),
];

/// Material identity of a block, independent of its state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BlockKind(u8);

impl BlockKind {
    pub const AIR: BlockKind = BlockKind(0);
    pub const STONE: BlockKind = BlockKind(1);
    pub const DIRT: BlockKind = BlockKind(2);
    pub const GRASS_BLOCK: BlockKind = BlockKind(3);
    pub const COBBLESTONE: BlockKind = BlockKind(4);
    pub const OAK_LOG: BlockKind = BlockKind(5);
    pub const OAK_PLANKS: BlockKind = BlockKind(6);
    pub const OAK_LEAVES: BlockKind = BlockKind(7);
    pub const GLASS: BlockKind = BlockKind(8);
    pub const VINE: BlockKind = BlockKind(9);
    pub const WATER: BlockKind = BlockKind(10);
    pub const OAK_FENCE: BlockKind = BlockKind(11);
    pub const OAK_SLAB: BlockKind = BlockKind(12);
    pub const TORCH: BlockKind = BlockKind(13);

    /// Static material description
    pub fn info(self) -> &'static MaterialInfo {
        &MATERIALS[self.0 as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Look up a material by name, with or without the `minecraft:` prefix
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.strip_prefix(NAMESPACE).unwrap_or(name);
        MATERIALS
            .iter()
            .position(|m| m.name == name)
            .map(|i| BlockKind(i as u8))
    }

    /// Every known material
    pub fn all() -> impl Iterator<Item = BlockKind> {
        (0..MATERIALS.len()).map(|i| BlockKind(i as u8))
    }

    fn property_flag(self, property: &str) -> Option<u8> {
        self.info()
            .properties
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, flag)| *flag)
    }
}

impl TryFrom<u8> for BlockKind {
    type Error = Error;

    /// Only ids present in the material table are accepted
    fn try_from(id: u8) -> Result<Self> {
        if (id as usize) < MATERIALS.len() {
            Ok(BlockKind(id))
        } else {
            Err(Error::UnknownMaterial(format!("material id {}", id)))
        }
    }
}

impl From<BlockKind> for u8 {
    fn from(kind: BlockKind) -> u8 {
        kind.0
    }
}

/// A concrete block: material plus state flags
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockSpec {
    pub kind: BlockKind,
    /// Bitset of `state` flags valid for `kind`
    pub state: u8,
}

impl BlockSpec {
    /// Empty/air block
    pub const AIR: BlockSpec = BlockSpec::new(BlockKind::AIR);

    pub const fn new(kind: BlockKind) -> Self {
        Self { kind, state: 0 }
    }

    pub const fn with_state(kind: BlockKind, state: u8) -> Self {
        Self { kind, state }
    }

    pub fn is_air(&self) -> bool {
        self.kind == BlockKind::AIR
    }

    /// Whether a vine may hang from this block
    pub fn is_solid_full_cube(&self) -> bool {
        let info = self.kind.info();
        info.solid && info.full_cube
    }

    pub fn is_vine(&self) -> bool {
        self.kind == BlockKind::VINE
    }

    pub fn has_flag(&self, flag: u8) -> bool {
        self.state & flag != 0
    }

    /// Set or clear a named boolean property
    pub fn with_property(self, property: &str, value: bool) -> Result<Self> {
        let flag = self.kind.property_flag(property).ok_or_else(|| {
            Error::InvalidBlockState(format!(
                "{} has no property '{}'",
                self.kind.name(),
                property
            ))
        })?;
        let state = if value { self.state | flag } else { self.state & !flag };
        Ok(Self { state, ..self })
    }

    /// Parse `name` or `name[prop=value,...]`
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let (name, properties) = match input.find('[') {
            Some(open) => {
                let body = input[open + 1..].strip_suffix(']').ok_or_else(|| {
                    Error::InvalidBlockState(format!("unclosed '[' in '{}'", input))
                })?;
                (&input[..open], Some(body))
            }
            None => (input, None),
        };

        if name.is_empty() {
            return Err(Error::InvalidBlockState(format!("missing material in '{}'", input)));
        }
        let kind = BlockKind::from_name(name)
            .ok_or_else(|| Error::UnknownMaterial(name.to_string()))?;
        let mut block = BlockSpec::new(kind);

        for pair in properties.into_iter().flat_map(|p| p.split(',')) {
            let pair = pair.trim();
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                Error::InvalidBlockState(format!("expected key=value, got '{}'", pair))
            })?;
            let value = match value.trim() {
                "true" => true,
                "false" => false,
                other => {
                    return Err(Error::InvalidBlockState(format!(
                        "expected true or false for '{}', got '{}'",
                        key.trim(),
                        other
                    )));
                }
            };
            block = block.with_property(key.trim(), value)?;
        }

        Ok(block)
    }
}

impl FromStr for BlockSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for BlockSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.name())?;
        let set: Vec<&str> = self
            .kind
            .info()
            .properties
            .iter()
            .filter(|(_, flag)| self.has_flag(*flag))
            .map(|(name, _)| *name)
            .collect();
        if !set.is_empty() {
            write!(f, "[")?;
            for (i, name) in set.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}=true", name)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
