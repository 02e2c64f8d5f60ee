//! Game world and level builder
//!
//! The world owns every object collection the frame loop touches:
//! - two ordered collidable layers (level geometry, characters)
//! - a render-only background tile list
//! - the grow-only spear pool
//! Objects are addressed by `ObjectId` — stable indices, not references —
//! so pairwise collision passes and deferred spawns never contend for
//! borrows of the same collection.

use std::fmt;

use macroquad::math::{vec2, Rect};

use crate::assets::Resources;

use super::object::{GameObject, ObjectData, PlayerData, SpearState};

/// Collidable layer holding static level geometry.
pub const LAYER_LEVEL: usize = 0;
/// Collidable layer holding the player (and any future characters).
pub const LAYER_CHARACTERS: usize = 1;

pub const MAP_ROWS: usize = 10;
pub const MAP_COLS: usize = 20;
pub const TILE_SIZE: f32 = 32.0;

/// A level layer: small integer tile codes, row-major, row 0 at the top.
pub type TileGrid = [[u8; MAP_COLS]; MAP_ROWS];

// Tile code table. This doubles as the level-format contract; renumbering
// breaks every existing grid.
pub const TILE_PLAYER: u8 = 1;
pub const TILE_BOAT: u8 = 2;
pub const TILE_SURFACE: u8 = 3;
pub const TILE_SHALLOW_WATER: u8 = 4;
pub const TILE_MEDIUM_WATER: u8 = 5;
pub const TILE_DEEP_WATER: u8 = 6;
pub const TILE_ROCK: u8 = 7;
pub const TILE_TREASURE: u8 = 8;

/// The interactive layer: seabed, scattered rocks, the boat and the diver.
pub const FOREGROUND_TILES: TileGrid = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 7, 0, 7, 0, 0, 0, 0, 0, 8, 0, 0, 0, 0, 0, 0],
    [7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7],
];

/// The decoration layer: water bands behind the action.
pub const BACKGROUND_TILES: TileGrid = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3],
    [4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4],
    [5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
    [6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6],
    [6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

/// Stable address of an object in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectId {
    Layer { layer: usize, index: usize },
    Spear { index: usize },
}

/// A level grid that cannot be turned into a world.
#[derive(Debug, PartialEq, Eq)]
pub enum WorldError {
    NoPlayer,
    MultiplePlayers,
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorldError::NoPlayer => write!(f, "level has no player tile"),
            WorldError::MultiplePlayers => write!(f, "level has more than one player tile"),
        }
    }
}

/// All mutable game state for one running level.
#[derive(Debug)]
pub struct World {
    pub layers: [Vec<GameObject>; 2],
    /// Drawn behind everything, never collided against.
    pub background_tiles: Vec<GameObject>,
    /// Spear pool. Grows on demand, never shrinks; slots are overwritten in
    /// place when recycled, so indices stay valid.
    pub spears: Vec<GameObject>,
    /// Index of the player in the characters layer.
    pub player_index: usize,
    /// Camera rectangle in world space; width/height are the logical
    /// presentation size.
    pub viewport: Rect,
    pub debug_mode: bool,
}

impl World {
    /// Populate a world from the two tile grids.
    ///
    /// Cell (row, col) lands at `(col * TILE_SIZE, viewport_h - (MAP_ROWS -
    /// row) * TILE_SIZE)`: the last row sits flush with the bottom of the
    /// logical area. Exactly one player tile must be present across both
    /// grids. Unknown codes are skipped, like empty cells.
    pub fn build(
        foreground: &TileGrid,
        background: &TileGrid,
        viewport_w: f32,
        viewport_h: f32,
        res: &Resources,
    ) -> Result<Self, WorldError> {
        let mut world = Self {
            layers: [Vec::new(), Vec::new()],
            background_tiles: Vec::new(),
            spears: Vec::new(),
            player_index: 0,
            viewport: Rect::new(0.0, 0.0, viewport_w, viewport_h),
            debug_mode: false,
        };

        let mut player_index = None;
        for grid in [foreground, background] {
            world.place_grid(grid, res, &mut player_index)?;
        }

        world.player_index = player_index.ok_or(WorldError::NoPlayer)?;
        Ok(world)
    }

    fn place_grid(
        &mut self,
        grid: &TileGrid,
        res: &Resources,
        player_index: &mut Option<usize>,
    ) -> Result<(), WorldError> {
        for (row, codes) in grid.iter().enumerate() {
            for (col, &code) in codes.iter().enumerate() {
                self.place_tile(code, row, col, res, player_index)?;
            }
        }
        Ok(())
    }

    fn place_tile(
        &mut self,
        code: u8,
        row: usize,
        col: usize,
        res: &Resources,
        player_index: &mut Option<usize>,
    ) -> Result<(), WorldError> {
        let position = vec2(
            col as f32 * TILE_SIZE,
            self.viewport.h - (MAP_ROWS - row) as f32 * TILE_SIZE,
        );
        let tile = |data: ObjectData, texture| {
            let mut obj = GameObject::new(data, position, texture);
            obj.collider = Rect::new(0.0, 0.0, TILE_SIZE, TILE_SIZE);
            obj
        };

        match code {
            TILE_PLAYER => {
                if player_index.is_some() {
                    return Err(WorldError::MultiplePlayers);
                }
                let mut player = tile(
                    ObjectData::Player(PlayerData::new()),
                    res.tex_diver_standing,
                );
                player.animations = res.player_anims.clone();
                player.current_animation = Some(Resources::ANIM_PLAYER_IDLE);
                player.acceleration = vec2(300.0, 0.0);
                player.max_speed_x = 100.0;
                player.dynamic = true;
                player.collider = Rect::new(11.0, 6.0, 10.0, 20.0);
                self.layers[LAYER_CHARACTERS].push(player);
                *player_index = Some(self.layers[LAYER_CHARACTERS].len() - 1);
            }
            TILE_BOAT => {
                let mut boat = tile(ObjectData::Level, res.tex_boat);
                // Only the hull line is walkable.
                boat.collider.y = 30.0;
                boat.collider.h = 2.0;
                self.layers[LAYER_LEVEL].push(boat);
            }
            TILE_SURFACE => {
                self.background_tiles
                    .push(tile(ObjectData::Level, res.tex_surface));
            }
            TILE_SHALLOW_WATER => {
                self.background_tiles
                    .push(tile(ObjectData::Level, res.tex_shallow_water));
            }
            TILE_MEDIUM_WATER => {
                self.background_tiles
                    .push(tile(ObjectData::Level, res.tex_medium_water));
            }
            TILE_DEEP_WATER => {
                self.background_tiles
                    .push(tile(ObjectData::Level, res.tex_deep_water));
            }
            TILE_ROCK => {
                self.layers[LAYER_LEVEL].push(tile(ObjectData::Level, res.tex_rock));
            }
            TILE_TREASURE => {
                self.layers[LAYER_LEVEL].push(tile(ObjectData::Level, res.tex_treasure));
            }
            _ => {}
        }
        Ok(())
    }

    pub fn object(&self, id: ObjectId) -> &GameObject {
        match id {
            ObjectId::Layer { layer, index } => &self.layers[layer][index],
            ObjectId::Spear { index } => &self.spears[index],
        }
    }

    pub fn object_mut(&mut self, id: ObjectId) -> &mut GameObject {
        match id {
            ObjectId::Layer { layer, index } => &mut self.layers[layer][index],
            ObjectId::Spear { index } => &mut self.spears[index],
        }
    }

    pub fn player(&self) -> &GameObject {
        &self.layers[LAYER_CHARACTERS][self.player_index]
    }

    pub fn player_mut(&mut self) -> &mut GameObject {
        &mut self.layers[LAYER_CHARACTERS][self.player_index]
    }

    /// Put a freshly fired spear into the pool: overwrite the first inactive
    /// slot, or grow the pool when every slot is live.
    pub fn fire_spear(&mut self, spear: GameObject) {
        let inactive = self
            .spears
            .iter()
            .position(|s| s.spear_state() == Some(SpearState::Inactive));
        match inactive {
            Some(index) => self.spears[index] = spear,
            None => self.spears.push(spear),
        }
    }

    /// Center the camera on the player horizontally. The camera never pans
    /// vertically.
    pub fn follow_player(&mut self) {
        self.viewport.x = (self.player().position.x + TILE_SIZE / 2.0) - self.viewport.w / 2.0;
    }
}
