//! Level loading from tile collision layers
//!
//! A level is exported as two flat symbol arrays (floor and platform layers)
//! laid out row-major with a fixed row width. Every cell holding the solid
//! symbol becomes one static block; anything else is empty space.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{BlockKind, CollisionBlock};
use crate::consts::{LEVEL_ROW_WIDTH, SOLID_SYMBOL, TILE_SIZE};

/// Raw collision layers as exported by the level editor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelData {
    pub floor_collisions: Vec<u32>,
    pub platform_collisions: Vec<u32>,
}

/// Decode one collision layer into blocks
///
/// Blocks come out in row-major order, which is the order collision
/// resolution scans them in. A trailing partial row is decoded like a full
/// one.
pub fn decode_layer(symbols: &[u32], kind: BlockKind) -> Vec<CollisionBlock> {
    symbols
        .chunks(LEVEL_ROW_WIDTH)
        .enumerate()
        .flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, symbol)| **symbol == SOLID_SYMBOL)
                .map(move |(col, _)| {
                    let position = Vec2::new(col as f32 * TILE_SIZE, row as f32 * TILE_SIZE);
                    CollisionBlock::new(kind, position)
                })
        })
        .collect()
}

/// Static level geometry, read-only for the lifetime of a session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Level {
    pub floor_blocks: Vec<CollisionBlock>,
    pub platform_blocks: Vec<CollisionBlock>,
}

impl Level {
    /// Build a level from its two collision layers
    pub fn from_layers(floor: &[u32], platform: &[u32]) -> Self {
        let level = Self {
            floor_blocks: decode_layer(floor, BlockKind::Floor),
            platform_blocks: decode_layer(platform, BlockKind::Platform),
        };
        log::debug!(
            "Level decoded: {} floor blocks, {} platform blocks",
            level.floor_blocks.len(),
            level.platform_blocks.len()
        );
        level
    }

    pub fn from_data(data: &LevelData) -> Self {
        Self::from_layers(&data.floor_collisions, &data.platform_collisions)
    }

    /// Parse a JSON level document
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let data: LevelData = serde_json::from_str(json)?;
        Ok(Self::from_data(&data))
    }

    /// Total number of blocks in both layers
    pub fn block_count(&self) -> usize {
        self.floor_blocks.len() + self.platform_blocks.len()
    }

    /// Built-in level used when no level file is supplied
    ///
    /// 36x27 tiles: a ground row, a raised ledge on the right, a stepped
    /// wall on the left and three floating platforms.
    pub fn demo() -> Self {
        Self::from_data(&demo_level_data())
    }
}

/// Layers for [`Level::demo`]
pub fn demo_level_data() -> LevelData {
    const ROWS: usize = 27;
    let mut floor = vec![0; LEVEL_ROW_WIDTH * ROWS];
    let mut platform = vec![0; LEVEL_ROW_WIDTH * ROWS];

    fn set(layer: &mut [u32], row: usize, cols: std::ops::Range<usize>) {
        for col in cols {
            layer[row * LEVEL_ROW_WIDTH + col] = SOLID_SYMBOL;
        }
    }

    // Ground
    set(&mut floor, 26, 0..LEVEL_ROW_WIDTH);
    // Ledge on the right
    set(&mut floor, 21, 28..LEVEL_ROW_WIDTH);
    // Stepped wall on the left
    set(&mut floor, 23, 0..3);
    set(&mut floor, 20, 0..2);

    set(&mut platform, 22, 10..14);
    set(&mut platform, 18, 16..20);
    set(&mut platform, 14, 22..26);

    LevelData {
        floor_collisions: floor,
        platform_collisions: platform,
    }
}
