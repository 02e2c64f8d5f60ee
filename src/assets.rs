//! Game resources
//!
//! Owns every texture and the canned animation sets. Simulation code only
//! ever holds `TextureId` handles; the actual `Texture2D`s live here and are
//! resolved at draw time. Construction is synchronous and touches no
//! platform state, so the simulation can be driven headless; `load()` fills
//! the texture table and is only called from the running game.

use macroquad::prelude::{load_texture, warn, Color, FilterMode, Texture2D};
use macroquad::prelude::{BLUE, BROWN, DARKBLUE, DARKPURPLE, GOLD, GRAY, LIGHTGRAY, ORANGE, SKYBLUE, YELLOW};

use crate::animation::Animation;
use crate::game::object::TextureId;
use crate::game::world::TILE_SIZE;

struct SpriteDef {
    file: &'static str,
    /// Horizontal sheet frames; placeholders are sized to match.
    frames: u16,
    fallback: Color,
}

/// Order matches the `TextureId` fields assigned in `Resources::new`.
const SPRITES: [SpriteDef; 11] = [
    SpriteDef { file: "diver_standing.png", frames: 1, fallback: ORANGE },
    SpriteDef { file: "diver_running.png", frames: 2, fallback: ORANGE },
    SpriteDef { file: "boat.png", frames: 1, fallback: BROWN },
    SpriteDef { file: "water_surface.png", frames: 1, fallback: SKYBLUE },
    SpriteDef { file: "shallow_water.png", frames: 1, fallback: BLUE },
    SpriteDef { file: "medium_water.png", frames: 1, fallback: DARKBLUE },
    SpriteDef { file: "deep_water.png", frames: 1, fallback: DARKPURPLE },
    SpriteDef { file: "rock.png", frames: 1, fallback: GRAY },
    SpriteDef { file: "treasure.png", frames: 1, fallback: GOLD },
    SpriteDef { file: "spear.png", frames: 1, fallback: LIGHTGRAY },
    SpriteDef { file: "spear_hit.png", frames: 3, fallback: YELLOW },
];

/// Texture table plus the animation sets shared by spawned objects.
pub struct Resources {
    textures: Vec<Texture2D>,
    pub tex_diver_standing: TextureId,
    pub tex_diver_running: TextureId,
    pub tex_boat: TextureId,
    pub tex_surface: TextureId,
    pub tex_shallow_water: TextureId,
    pub tex_medium_water: TextureId,
    pub tex_deep_water: TextureId,
    pub tex_rock: TextureId,
    pub tex_treasure: TextureId,
    pub tex_spear: TextureId,
    pub tex_spear_hit: TextureId,
    pub player_anims: Vec<Animation>,
    pub spear_anims: Vec<Animation>,
}

impl Resources {
    pub const ANIM_PLAYER_IDLE: usize = 0;
    pub const ANIM_PLAYER_RUN: usize = 1;
    pub const ANIM_SPEAR_MOVING: usize = 0;
    pub const ANIM_SPEAR_HIT: usize = 1;

    pub fn new() -> Self {
        Self {
            textures: Vec::new(),
            tex_diver_standing: TextureId::new(0),
            tex_diver_running: TextureId::new(1),
            tex_boat: TextureId::new(2),
            tex_surface: TextureId::new(3),
            tex_shallow_water: TextureId::new(4),
            tex_medium_water: TextureId::new(5),
            tex_deep_water: TextureId::new(6),
            tex_rock: TextureId::new(7),
            tex_treasure: TextureId::new(8),
            tex_spear: TextureId::new(9),
            tex_spear_hit: TextureId::new(10),
            player_anims: vec![Animation::new(1, 0.5), Animation::new(2, 0.5)],
            spear_anims: vec![Animation::new(1, 0.05), Animation::new(3, 0.15)],
        }
    }

    /// Fill the texture table. A missing file is not fatal: the slot gets a
    /// flat-color placeholder so the game stays playable.
    pub async fn load(&mut self) {
        self.textures.clear();
        for def in &SPRITES {
            let path = format!("assets/sprites/{}", def.file);
            let texture = match load_texture(&path).await {
                Ok(texture) => texture,
                Err(err) => {
                    warn!("missing sprite {} ({}), using a placeholder", path, err);
                    placeholder(def.frames, def.fallback)
                }
            };
            texture.set_filter(FilterMode::Nearest);
            self.textures.push(texture);
        }
    }

    pub fn texture(&self, id: TextureId) -> &Texture2D {
        &self.textures[id.index()]
    }
}

impl Default for Resources {
    fn default() -> Self {
        Self::new()
    }
}

fn placeholder(frames: u16, color: Color) -> Texture2D {
    let width = TILE_SIZE as u16 * frames;
    let height = TILE_SIZE as u16;
    let rgba = [
        (color.r * 255.0) as u8,
        (color.g * 255.0) as u8,
        (color.b * 255.0) as u8,
        (color.a * 255.0) as u8,
    ];
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
    for _ in 0..width as usize * height as usize {
        pixels.extend_from_slice(&rgba);
    }
    Texture2D::from_rgba8(width, height, &pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_ids_are_distinct() {
        let res = Resources::new();
        let ids = [
            res.tex_diver_standing,
            res.tex_diver_running,
            res.tex_boat,
            res.tex_surface,
            res.tex_shallow_water,
            res.tex_medium_water,
            res.tex_deep_water,
            res.tex_rock,
            res.tex_treasure,
            res.tex_spear,
            res.tex_spear_hit,
        ];
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(ids.len(), SPRITES.len());
    }

    #[test]
    fn test_animation_sets_match_their_indices() {
        let res = Resources::new();
        assert_eq!(res.player_anims.len(), 2);
        assert_eq!(res.spear_anims.len(), 2);

        // The run cycle shows its second frame in the back half.
        let mut run = res.player_anims[Resources::ANIM_PLAYER_RUN];
        run.step(0.3);
        assert_eq!(run.current_frame(), 1);
    }
}
