//! Script-container parsing: the section-pointer prelude, script header and
//! per-entity function-offset tables.

use tracing::debug;

use crate::error::DecompileError;
use crate::reader::Reader;

/// Number of section pointers every full container carries.
pub const NUM_SECTIONS: usize = 7;

/// Size in bytes of the section-pointer prelude (`NUM_SECTIONS` little-
/// endian `u32`s).
pub const SECTION_POINTERS_SIZE: u32 = (NUM_SECTIONS * 4) as u32;

/// Magic value every script section's header starts with.
pub const SCRIPT_MAGIC: u16 = 0x0502;

/// Maximum number of script entry points one entity can declare.
pub const MAX_FUNCTIONS_PER_ENTITY: usize = 32;

/// The raw, normalized offsets of each of the container's sections.
///
/// Only [`SectionTable::script`] is consumed by this crate's pipeline; the
/// rest are kept as opaque ranges for a caller that wants to forward them to
/// a sibling parser for walkmesh, tilemap, camera, trigger, encounter or
/// model data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionTable {
    /// Offsets of each section, normalized to be relative to the start of
    /// the container (see [`SectionTable::read`]).
    pub offsets: [u32; NUM_SECTIONS],
}

/// Indices into [`SectionTable::offsets`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(usize)]
pub enum Section {
    /// The field-script bytecode section.
    Script = 0,
    /// Walkmesh geometry.
    WalkMesh = 1,
    /// Tile map data.
    TileMap = 2,
    /// Camera matrix presets.
    CameraMatrix = 3,
    /// Trigger/gateway geometry.
    Triggers = 4,
    /// Random-encounter table.
    Encounter = 5,
    /// Model load list.
    Models = 6,
}

impl SectionTable {
    /// Read the 7-pointer prelude and normalize each pointer to be relative
    /// to the start of the buffer: `offset[i] - offset[0] + SECTION_POINTERS_SIZE`.
    pub fn read(reader: &mut Reader<'_>) -> Result<Self, DecompileError> {
        let mut raw = [0u32; NUM_SECTIONS];
        for slot in raw.iter_mut() {
            *slot = reader.read_u32()?;
        }
        let base = raw[0];
        let mut offsets = [0u32; NUM_SECTIONS];
        for (i, value) in raw.iter().enumerate() {
            offsets[i] = value
                .checked_sub(base)
                .and_then(|v| v.checked_add(SECTION_POINTERS_SIZE))
                .ok_or_else(|| DecompileError::InvalidHeader {
                    reason: format!("section pointer {i} underflows base pointer"),
                })?;
        }
        Ok(SectionTable { offsets })
    }

    /// The script section's normalized start offset.
    pub fn script_offset(&self) -> u32 {
        self.offsets[Section::Script as usize]
    }
}

/// One field-script entity: a name plus up to
/// [`MAX_FUNCTIONS_PER_ENTITY`] function entry-point offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// The entity's 8-byte (NUL-padded) name.
    pub name: String,
    /// Entry-point offsets, relative to the script section's start. A slot
    /// equal to any earlier slot's offset is a duplicate and is recorded
    /// but not treated as a distinct function (see `function.rs`).
    pub function_offsets: Vec<u16>,
}

/// The parsed script-section header: magic, entity count, and the per-
/// entity function tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptHeader {
    /// Entities declared by this script.
    pub entities: Vec<Entity>,
}

impl ScriptHeader {
    /// Parse a script section starting at `reader`'s current position,
    /// which must already be seeked to [`SectionTable::script_offset`].
    ///
    /// Layout, in order: magic, `numEntities:u8`, `numModels:u8`,
    /// `offsetToStrings:u16`, `numAkao:u16`, `scale:u16`, 6 reserved bytes,
    /// `creator[8]`, `name[8]`, then all entity names as one contiguous
    /// block, then `numAkao` Akao offsets as a second contiguous block,
    /// then all entities' 32-slot function-offset tables as a third
    /// contiguous block. Names and function-offset tables are NOT
    /// interleaved per entity.
    pub fn read(reader: &mut Reader<'_>) -> Result<Self, DecompileError> {
        let magic = reader.read_u16()?;
        if magic != SCRIPT_MAGIC {
            return Err(DecompileError::InvalidHeader {
                reason: format!("bad script magic 0x{magic:04x}, expected 0x{SCRIPT_MAGIC:04x}"),
            });
        }
        let entity_count = reader.read_u8()? as usize;
        let _model_count = reader.read_u8()?;
        let _offset_to_strings = reader.read_u16()?;
        let akao_count = reader.read_u16()? as usize;
        let _scale = reader.read_u16()?;
        reader.take(6)?; // reserved
        let _creator = reader.read_cstring_fixed(8)?;
        let _name = reader.read_cstring_fixed(8)?;
        debug!(entity_count, akao_count, "parsed script header");

        let mut names = Vec::with_capacity(entity_count);
        for _ in 0..entity_count {
            names.push(reader.read_cstring_fixed(8)?);
        }

        for _ in 0..akao_count {
            reader.read_u32()?;
        }

        let mut entities = Vec::with_capacity(entity_count);
        for name in names {
            let mut function_offsets = Vec::with_capacity(MAX_FUNCTIONS_PER_ENTITY);
            for _ in 0..MAX_FUNCTIONS_PER_ENTITY {
                function_offsets.push(reader.read_u16()?);
            }
            entities.push(Entity { name, function_offsets });
        }

        Ok(ScriptHeader { entities })
    }
}
